pub mod macros;
pub mod structs;

pub use structs::ElevatorSnapshot;
pub use structs::Operation;
pub use structs::Outcome;
pub use structs::State;
pub use structs::TransitionEvent;
