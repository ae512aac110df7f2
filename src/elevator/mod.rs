pub mod fsm;
pub mod narration;
pub mod sink;
pub mod transition;
pub mod transition_tests;

pub use fsm::ElevatorController;
pub use narration::Narration;
pub use sink::{ChannelSink, EventSink, JsonLinesSink, LogSink, MemorySink};
