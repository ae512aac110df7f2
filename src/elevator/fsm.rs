use crate::config::ControllerConfig;
use crate::elevator::sink::{EventSink, LogSink};
use crate::elevator::transition;
use crate::shared::{ElevatorSnapshot, Operation, Outcome, State, TransitionEvent};
use log::{debug, warn};

/**
 * Owns the elevator's state and floor and runs operations against them.
 *
 * The `ElevatorController` has no behaviour of its own. Every operation is looked up in the
 * transition table for the current state, the resulting state and floor are applied, an event
 * is emitted to the sink, and any cascaded operation is run on the same call stack before the
 * outer operation returns.
 *
 * # Fields
 * - `state`:           Current operating mode.
 * - `floor`:           Current floor. Never below `ground_floor`.
 * - `ground_floor`:    Lowest floor the elevator accepts calls for.
 * - `sink`:            Receives one event per handled operation, cascades included.
 */
pub struct ElevatorController {
    state: State,
    floor: i32,
    ground_floor: i32,
    sink: Box<dyn EventSink + Send>,
}

impl ElevatorController {
    pub fn new() -> ElevatorController {
        ElevatorController::with_sink(Box::new(LogSink))
    }

    pub fn with_sink(sink: Box<dyn EventSink + Send>) -> ElevatorController {
        ElevatorController::from_config(&ControllerConfig::default(), sink)
    }

    pub fn from_config(
        config: &ControllerConfig,
        sink: Box<dyn EventSink + Send>,
    ) -> ElevatorController {
        let floor = config.initial_floor.max(config.ground_floor);
        if floor != config.initial_floor {
            warn!(
                "Initial floor {} is below ground floor {}, starting at floor {}",
                config.initial_floor, config.ground_floor, floor
            );
        }

        ElevatorController {
            state: State::Idle,
            floor,
            ground_floor: config.ground_floor,
            sink,
        }
    }

    #[cfg(test)]
    pub(crate) fn in_state(
        state: State,
        floor: i32,
        sink: Box<dyn EventSink + Send>,
    ) -> ElevatorController {
        ElevatorController {
            state,
            floor,
            ground_floor: ControllerConfig::default().ground_floor,
            sink,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            state: self.state,
            floor: self.floor,
        }
    }

    pub fn call(&mut self, floor: i32) -> Outcome {
        self.handle(Operation::Call { floor })
    }

    pub fn arrive(&mut self, floor: i32) -> Outcome {
        self.handle(Operation::Arrive { floor })
    }

    pub fn open_door(&mut self) -> Outcome {
        self.handle(Operation::OpenDoor)
    }

    pub fn close_door(&mut self) -> Outcome {
        self.handle(Operation::CloseDoor)
    }

    pub fn fault(&mut self) -> Outcome {
        self.handle(Operation::Fault)
    }

    pub fn repair(&mut self) -> Outcome {
        self.handle(Operation::Repair)
    }

    /// Runs one external operation, cascades included. Returns the outcome of the operation itself.
    pub fn handle(&mut self, operation: Operation) -> Outcome {
        self.dispatch(operation, 0)
    }

    fn dispatch(&mut self, operation: Operation, depth: usize) -> Outcome {
        let from = self.state;
        let step = transition::step(from, self.floor, self.ground_floor, operation);
        debug!(
            "{} in {} -> {} (floor {}, depth {})",
            operation, from, step.next_state, step.floor, depth
        );

        self.state = step.next_state;
        self.floor = step.floor;

        self.sink.emit(&TransitionEvent {
            from,
            to: step.next_state,
            operation,
            floor: step.floor,
            outcome: step.outcome,
            depth,
            message: format!("[{}] {}", from, step.narration),
        });

        if let Some(next) = step.cascade {
            self.dispatch(next, depth + 1);
        }

        step.outcome
    }
}

impl Default for ElevatorController {
    fn default() -> ElevatorController {
        ElevatorController::new()
    }
}
