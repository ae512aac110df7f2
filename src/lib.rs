//! Finite-state-machine elevator controller.
//!
//! Five states, six operations and a total transition table. Operations run synchronously,
//! cascades included, and report what happened through an [`elevator::EventSink`].

/* Modules */
pub mod config;
pub mod elevator;
pub mod scenario;
pub mod shared;


pub use elevator::ElevatorController;
pub use shared::{ElevatorSnapshot, Operation, Outcome, State, TransitionEvent};
