/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
/**
 * What the controller says about a handled operation.
 *
 * There is one variant per distinct message in the transition table. The
 * state prefix (`[Idle]`, `[Fault]`, ...) is added by the controller when the
 * event is recorded, so the same variant can be shared by several states.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narration {
    // Progress
    CallAccepted { floor: i32 },
    FloorRequestAccepted { floor: i32 },
    Arrived { floor: i32 },
    DoorOpening,
    DoorClosing,
    Repaired,

    // Faults
    FaultDetected,
    EmergencyStop,
    AlreadyFaulted,

    // Rejections and no-ops
    Busy,
    CloseDoorFirst,
    NotRunning,
    DoorOpenNotMoving,
    DoorAlreadyOpen,
    DoorAlreadyClosed,
    CannotOpenWhileRunning,
    CannotRepairWhileRunning,
    NoRepairNeeded,
    OutOfService,
    CannotArriveFaulted,
    DoorCannotOpen,
    DoorCannotClose,
    FloorOutOfRange { floor: i32, ground_floor: i32 },
}

/***************************************/
/*             Rendering               */
/***************************************/
impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::CallAccepted { floor } => {
                write!(f, "call received, heading to floor {}", floor)
            }
            Narration::FloorRequestAccepted { floor } => {
                write!(f, "floor request received, starting towards floor {}", floor)
            }
            Narration::Arrived { floor } => write!(f, "arrived at floor {}", floor),
            Narration::DoorOpening => write!(f, "opening door"),
            Narration::DoorClosing => write!(f, "closing door"),
            Narration::Repaired => write!(f, "repair complete, back to idle"),
            Narration::FaultDetected => write!(f, "fault detected, switching to fault state"),
            Narration::EmergencyStop => write!(f, "fault detected, emergency stop!"),
            Narration::AlreadyFaulted => write!(f, "already in fault state"),
            Narration::Busy => write!(f, "already running, please wait"),
            Narration::CloseDoorFirst => write!(f, "door is open, close it before calling"),
            Narration::NotRunning => write!(f, "not running, cannot arrive at a new floor"),
            Narration::DoorOpenNotMoving => write!(f, "door is open, not moving"),
            Narration::DoorAlreadyOpen => write!(f, "door is already open"),
            Narration::DoorAlreadyClosed => write!(f, "door is already closed"),
            Narration::CannotOpenWhileRunning => write!(f, "cannot open door while running"),
            Narration::CannotRepairWhileRunning => write!(f, "cannot repair while running"),
            Narration::NoRepairNeeded => write!(f, "operating normally, no repair needed"),
            Narration::OutOfService => write!(f, "out of service, cannot respond"),
            Narration::CannotArriveFaulted => write!(f, "out of service, cannot arrive at a new floor"),
            Narration::DoorCannotOpen => write!(f, "out of service, door cannot open"),
            Narration::DoorCannotClose => write!(f, "out of service, door cannot close"),
            Narration::FloorOutOfRange {
                floor,
                ground_floor,
            } => write!(
                f,
                "floor {} is below the ground floor {}, ignored",
                floor, ground_floor
            ),
        }
    }
}
