/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorController;
use crate::shared::{ElevatorSnapshot, Operation, Outcome};
use log::info;

/// The demonstration script: two calls, a fault and a repair, ending door-closed on floor 2.
pub fn reference_scenario() -> Vec<Operation> {
    vec![
        Operation::Call { floor: 5 },
        Operation::CloseDoor,
        Operation::Call { floor: 2 },
        Operation::Fault,
        Operation::Repair,
        Operation::OpenDoor,
        Operation::CloseDoor,
    ]
}

/// Runs every operation in order and returns the outcome of each external call.
pub fn run_scenario(controller: &mut ElevatorController, steps: &[Operation]) -> Vec<Outcome> {
    let outcomes = steps
        .iter()
        .map(|operation| controller.handle(*operation))
        .collect();
    let ElevatorSnapshot { state, floor } = controller.snapshot();
    info!("Scenario of {} steps finished in {} at floor {}", steps.len(), state, floor);
    outcomes
}
