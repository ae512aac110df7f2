/*
 * Unit tests for the transition table
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_every_cell_is_defined
 * - test_no_op_cells_keep_state_and_floor
 * - test_fault_wins_from_every_state
 * - test_fault_state_only_leaves_on_repair
 * - test_call_cascades_into_arrive
 * - test_arrive_updates_floor_and_cascades_open
 * - test_running_rejects_call
 * - test_call_below_ground_floor_is_ignored
 * - test_table_matches_expected_next_states
 * - test_no_op_cells_are_ignored
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod transition_tests {
    use crate::elevator::narration::Narration;
    use crate::elevator::transition::step;
    use crate::shared::Operation;
    use crate::shared::Outcome::{Advanced, FaultedOut, Ignored};
    use crate::shared::State::{self, DoorClosed, DoorOpen, Fault, Idle, Running};

    const GROUND: i32 = 1;
    const FLOOR: i32 = 3;

    fn all_operations() -> Vec<Operation> {
        vec![
            Operation::Call { floor: 7 },
            Operation::Arrive { floor: 7 },
            Operation::OpenDoor,
            Operation::CloseDoor,
            Operation::Fault,
            Operation::Repair,
        ]
    }

    #[test]
    fn test_every_cell_is_defined() {
        // Purpose: Verify that every (state, operation) pair yields a step with a valid state

        for state in State::ALL {
            for operation in all_operations() {
                // Act
                let result = step(state, FLOOR, GROUND, operation);

                // Assert
                assert!(State::ALL.contains(&result.next_state));
                assert!(result.floor >= GROUND);
            }
        }
    }

    #[test]
    fn test_no_op_cells_keep_state_and_floor() {
        // Purpose: Verify that ignored cells never change state, floor or cascade anything

        for state in State::ALL {
            for operation in all_operations() {
                // Act
                let result = step(state, FLOOR, GROUND, operation);

                // Assert
                if result.outcome == Ignored {
                    assert_eq!(result.next_state, state, "{} in {}", operation, state);
                    assert_eq!(result.floor, FLOOR, "{} in {}", operation, state);
                    assert_eq!(result.cascade, None, "{} in {}", operation, state);
                }
            }
        }
    }

    #[test]
    fn test_fault_wins_from_every_state() {
        // Purpose: Verify that fault() always ends in Fault and reports FaultedOut unless already faulted

        for state in State::ALL {
            // Act
            let result = step(state, FLOOR, GROUND, Operation::Fault);

            // Assert
            assert_eq!(result.next_state, Fault);
            if state == Fault {
                assert_eq!(result.outcome, Ignored);
                assert_eq!(result.narration, Narration::AlreadyFaulted);
            } else {
                assert_eq!(result.outcome, FaultedOut);
            }
        }
    }

    #[test]
    fn test_fault_state_only_leaves_on_repair() {
        // Purpose: Verify that Fault absorbs every operation except repair(), which returns to Idle

        for operation in all_operations() {
            // Act
            let result = step(Fault, FLOOR, GROUND, operation);

            // Assert
            match operation {
                Operation::Repair => {
                    assert_eq!(result.next_state, Idle);
                    assert_eq!(result.outcome, Advanced);
                }
                _ => assert_eq!(result.next_state, Fault),
            }
        }

        // repair() is a recovery only from Fault
        for state in [Idle, Running, DoorOpen, DoorClosed] {
            let result = step(state, FLOOR, GROUND, Operation::Repair);
            assert_eq!(result.next_state, state);
            assert_eq!(result.outcome, Ignored);
        }
    }

    #[test]
    fn test_call_cascades_into_arrive() {
        // Purpose: Verify that a call from Idle or DoorClosed starts running and schedules arrive

        for state in [Idle, DoorClosed] {
            // Act
            let result = step(state, FLOOR, GROUND, Operation::Call { floor: 5 });

            // Assert
            assert_eq!(result.next_state, Running);
            assert_eq!(result.floor, FLOOR);
            assert_eq!(result.outcome, Advanced);
            assert_eq!(result.cascade, Some(Operation::Arrive { floor: 5 }));
        }
    }

    #[test]
    fn test_arrive_updates_floor_and_cascades_open() {
        // Purpose: Verify that arrive from Running moves to the floor, opens the door state and cascades open_door()

        // Act
        let result = step(Running, FLOOR, GROUND, Operation::Arrive { floor: 9 });

        // Assert
        assert_eq!(result.next_state, DoorOpen);
        assert_eq!(result.floor, 9);
        assert_eq!(result.narration, Narration::Arrived { floor: 9 });
        assert_eq!(result.cascade, Some(Operation::OpenDoor));
    }

    #[test]
    fn test_running_rejects_call() {
        // Purpose: Verify the busy rejection

        for floor in [GROUND, 2, 40] {
            // Act
            let result = step(Running, FLOOR, GROUND, Operation::Call { floor });

            // Assert
            assert_eq!(result.next_state, Running);
            assert_eq!(result.narration, Narration::Busy);
            assert_eq!(result.outcome, Ignored);
        }
    }

    #[test]
    fn test_call_below_ground_floor_is_ignored() {
        // Purpose: Verify that floors below the ground floor never move the elevator

        for (state, operation) in [
            (Idle, Operation::Call { floor: 0 }),
            (DoorClosed, Operation::Call { floor: -2 }),
            (Running, Operation::Arrive { floor: 0 }),
        ] {
            // Act
            let result = step(state, FLOOR, GROUND, operation);

            // Assert
            assert_eq!(result.next_state, state);
            assert_eq!(result.floor, FLOOR);
            assert_eq!(result.outcome, Ignored);
            assert!(matches!(result.narration, Narration::FloorOutOfRange { .. }));
        }
    }

    #[test]
    fn test_table_matches_expected_next_states() {
        // Purpose: Verify next state and outcome of every cell, row by row

        // Arrange
        // Columns: call, arrive, open_door, close_door, fault, repair
        let table = [
            (Idle, [
                (Running, Advanced),
                (Idle, Ignored),
                (DoorOpen, Advanced),
                (Idle, Ignored),
                (Fault, FaultedOut),
                (Idle, Ignored),
            ]),
            (Running, [
                (Running, Ignored),
                (DoorOpen, Advanced),
                (Running, Ignored),
                (Running, Ignored),
                (Fault, FaultedOut),
                (Running, Ignored),
            ]),
            (DoorOpen, [
                (DoorOpen, Ignored),
                (DoorOpen, Ignored),
                (DoorOpen, Ignored),
                (DoorClosed, Advanced),
                (Fault, FaultedOut),
                (DoorOpen, Ignored),
            ]),
            (DoorClosed, [
                (Running, Advanced),
                (DoorClosed, Ignored),
                (DoorOpen, Advanced),
                (DoorClosed, Ignored),
                (Fault, FaultedOut),
                (DoorClosed, Ignored),
            ]),
            (Fault, [
                (Fault, Ignored),
                (Fault, Ignored),
                (Fault, Ignored),
                (Fault, Ignored),
                (Fault, Ignored),
                (Idle, Advanced),
            ]),
        ];

        for (state, expected) in table {
            for (operation, (next_state, outcome)) in all_operations().into_iter().zip(expected) {
                // Act
                let result = step(state, FLOOR, GROUND, operation);

                // Assert
                assert_eq!(result.next_state, next_state, "{} in {}", operation, state);
                assert_eq!(result.outcome, outcome, "{} in {}", operation, state);
            }
        }
    }

    #[test]
    fn test_no_op_cells_are_ignored() {
        // Purpose: Verify that every rejected or no-op cell reports Ignored and leaves state and floor alone

        // Arrange
        let no_op_cells = [
            (Idle, Operation::Arrive { floor: 7 }),
            (Idle, Operation::CloseDoor),
            (Idle, Operation::Repair),
            (Running, Operation::Call { floor: 7 }),
            (Running, Operation::OpenDoor),
            (Running, Operation::CloseDoor),
            (Running, Operation::Repair),
            (DoorOpen, Operation::Call { floor: 7 }),
            (DoorOpen, Operation::Arrive { floor: 7 }),
            (DoorOpen, Operation::OpenDoor),
            (DoorOpen, Operation::Repair),
            (DoorClosed, Operation::Arrive { floor: 7 }),
            (DoorClosed, Operation::CloseDoor),
            (DoorClosed, Operation::Repair),
            (Fault, Operation::Call { floor: 7 }),
            (Fault, Operation::Arrive { floor: 7 }),
            (Fault, Operation::OpenDoor),
            (Fault, Operation::CloseDoor),
            (Fault, Operation::Fault),
        ];

        for (state, operation) in no_op_cells {
            // Act
            let result = step(state, FLOOR, GROUND, operation);

            // Assert
            assert_eq!(result.outcome, Ignored, "{} in {}", operation, state);
            assert_eq!(result.next_state, state, "{} in {}", operation, state);
            assert_eq!(result.floor, FLOOR, "{} in {}", operation, state);
            assert_eq!(result.cascade, None, "{} in {}", operation, state);
        }
    }
}
