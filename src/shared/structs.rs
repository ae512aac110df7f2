/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Idle,
    Running,
    DoorOpen,
    DoorClosed,
    Fault,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Idle,
        State::Running,
        State::DoorOpen,
        State::DoorClosed,
        State::Fault,
    ];
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Idle => "Idle",
            State::Running => "Running",
            State::DoorOpen => "DoorOpen",
            State::DoorClosed => "DoorClosed",
            State::Fault => "Fault",
        };
        write!(f, "{}", name)
    }
}

/**
 * An externally invokable action. `Call` and `Arrive` carry the target floor.
 *
 * Serialized as a tagged table so scenario scripts can be written as
 * `{ op = "call", floor = 5 }` or `{ op = "close_door" }`.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Call { floor: i32 },
    Arrive { floor: i32 },
    OpenDoor,
    CloseDoor,
    Fault,
    Repair,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Call { floor } => write!(f, "call({})", floor),
            Operation::Arrive { floor } => write!(f, "arrive({})", floor),
            Operation::OpenDoor => write!(f, "open_door()"),
            Operation::CloseDoor => write!(f, "close_door()"),
            Operation::Fault => write!(f, "fault()"),
            Operation::Repair => write!(f, "repair()"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Advanced,
    Ignored,
    FaultedOut,
}

/**
 * One handled operation, cascaded ones included.
 *
 * # Fields
 * - `from`:        State the operation was handled in.
 * - `to`:          State after the operation.
 * - `operation`:   The operation itself.
 * - `floor`:       Current floor after the operation.
 * - `outcome`:     Whether the operation advanced, was ignored or faulted out.
 * - `depth`:       0 for the external call, 1.. for each cascade level.
 * - `message`:     Rendered narration.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitionEvent {
    pub from: State,
    pub to: State,
    pub operation: Operation,
    pub floor: i32,
    pub outcome: Outcome,
    pub depth: usize,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub state: State,
    pub floor: i32,
}

impl fmt::Display for ElevatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ floor {}", self.state, self.floor)
    }
}
