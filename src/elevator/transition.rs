use crate::elevator::narration::Narration;
use crate::shared::{Operation, Outcome, State};

/**
 * The result of handling one operation in one state.
 *
 * # Fields
 * - `next_state`:  State to move to. Equal to the current state for rejected and no-op cells.
 * - `floor`:       Current floor after the step. Only `arrive` from `Running` changes it.
 * - `narration`:   What to tell the outside world.
 * - `outcome`:     Coarse result signal for callers.
 * - `cascade`:     Operation the controller must run next, synchronously, before returning.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next_state: State,
    pub floor: i32,
    pub narration: Narration,
    pub outcome: Outcome,
    pub cascade: Option<Operation>,
}

impl Step {
    fn stay(state: State, floor: i32, narration: Narration) -> Step {
        Step {
            next_state: state,
            floor,
            narration,
            outcome: Outcome::Ignored,
            cascade: None,
        }
    }

    fn advance(next_state: State, floor: i32, narration: Narration) -> Step {
        Step {
            next_state,
            floor,
            narration,
            outcome: Outcome::Advanced,
            cascade: None,
        }
    }

    fn fault_out(floor: i32, narration: Narration) -> Step {
        Step {
            next_state: State::Fault,
            floor,
            narration,
            outcome: Outcome::FaultedOut,
            cascade: None,
        }
    }

    fn then(mut self, operation: Operation) -> Step {
        self.cascade = Some(operation);
        self
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Total transition function. Every (state, operation) pair yields a step.
pub fn step(state: State, floor: i32, ground_floor: i32, operation: Operation) -> Step {
    match state {
        State::Idle => idle(floor, ground_floor, operation),
        State::Running => running(floor, ground_floor, operation),
        State::DoorOpen => door_open(floor, operation),
        State::DoorClosed => door_closed(floor, ground_floor, operation),
        State::Fault => fault(floor, operation),
    }
}

/***************************************/
/*           State handlers            */
/***************************************/
fn idle(floor: i32, ground_floor: i32, operation: Operation) -> Step {
    match operation {
        Operation::Call { floor: target } if target < ground_floor => {
            Step::stay(State::Idle, floor, out_of_range(target, ground_floor))
        }
        Operation::Call { floor: target } => Step::advance(
            State::Running,
            floor,
            Narration::CallAccepted { floor: target },
        )
        .then(Operation::Arrive { floor: target }),
        Operation::Arrive { .. } => Step::stay(State::Idle, floor, Narration::NotRunning),
        Operation::OpenDoor => Step::advance(State::DoorOpen, floor, Narration::DoorOpening),
        Operation::CloseDoor => Step::stay(State::Idle, floor, Narration::DoorAlreadyClosed),
        Operation::Fault => Step::fault_out(floor, Narration::FaultDetected),
        Operation::Repair => Step::stay(State::Idle, floor, Narration::NoRepairNeeded),
    }
}

fn running(floor: i32, ground_floor: i32, operation: Operation) -> Step {
    match operation {
        Operation::Call { .. } => Step::stay(State::Running, floor, Narration::Busy),
        Operation::Arrive { floor: target } if target < ground_floor => {
            Step::stay(State::Running, floor, out_of_range(target, ground_floor))
        }
        Operation::Arrive { floor: target } => {
            Step::advance(State::DoorOpen, target, Narration::Arrived { floor: target })
                .then(Operation::OpenDoor)
        }
        Operation::OpenDoor => {
            Step::stay(State::Running, floor, Narration::CannotOpenWhileRunning)
        }
        Operation::CloseDoor => Step::stay(State::Running, floor, Narration::DoorAlreadyClosed),
        Operation::Fault => Step::fault_out(floor, Narration::EmergencyStop),
        Operation::Repair => {
            Step::stay(State::Running, floor, Narration::CannotRepairWhileRunning)
        }
    }
}

fn door_open(floor: i32, operation: Operation) -> Step {
    match operation {
        Operation::Call { .. } => Step::stay(State::DoorOpen, floor, Narration::CloseDoorFirst),
        Operation::Arrive { .. } => {
            Step::stay(State::DoorOpen, floor, Narration::DoorOpenNotMoving)
        }
        Operation::OpenDoor => Step::stay(State::DoorOpen, floor, Narration::DoorAlreadyOpen),
        Operation::CloseDoor => Step::advance(State::DoorClosed, floor, Narration::DoorClosing),
        Operation::Fault => Step::fault_out(floor, Narration::FaultDetected),
        Operation::Repair => Step::stay(State::DoorOpen, floor, Narration::NoRepairNeeded),
    }
}

fn door_closed(floor: i32, ground_floor: i32, operation: Operation) -> Step {
    match operation {
        Operation::Call { floor: target } if target < ground_floor => {
            Step::stay(State::DoorClosed, floor, out_of_range(target, ground_floor))
        }
        Operation::Call { floor: target } => Step::advance(
            State::Running,
            floor,
            Narration::FloorRequestAccepted { floor: target },
        )
        .then(Operation::Arrive { floor: target }),
        Operation::Arrive { .. } => Step::stay(State::DoorClosed, floor, Narration::NotRunning),
        Operation::OpenDoor => Step::advance(State::DoorOpen, floor, Narration::DoorOpening),
        Operation::CloseDoor => {
            Step::stay(State::DoorClosed, floor, Narration::DoorAlreadyClosed)
        }
        Operation::Fault => Step::fault_out(floor, Narration::FaultDetected),
        Operation::Repair => Step::stay(State::DoorClosed, floor, Narration::NoRepairNeeded),
    }
}

fn fault(floor: i32, operation: Operation) -> Step {
    match operation {
        Operation::Call { .. } => Step::stay(State::Fault, floor, Narration::OutOfService),
        Operation::Arrive { .. } => {
            Step::stay(State::Fault, floor, Narration::CannotArriveFaulted)
        }
        Operation::OpenDoor => Step::stay(State::Fault, floor, Narration::DoorCannotOpen),
        Operation::CloseDoor => Step::stay(State::Fault, floor, Narration::DoorCannotClose),
        Operation::Fault => Step::stay(State::Fault, floor, Narration::AlreadyFaulted),
        Operation::Repair => Step::advance(State::Idle, floor, Narration::Repaired),
    }
}

fn out_of_range(floor: i32, ground_floor: i32) -> Narration {
    Narration::FloorOutOfRange {
        floor,
        ground_floor,
    }
}
