mod common;

use common::{assert_world_sound, cross_with, standard_script, STANDARD_SOLUTION};
use rivercross_core::{
    CrossingController, CrossingEvent, Direction, Passenger, PassengerKind, PuzzleState,
    RiverCrossError, ScriptedIo, Selection, Shore, Side, Violation,
};

use PassengerKind::{Cabbage, Goat, Wolf};

// ===== TERMINATION =====

#[test]
fn test_standard_solution_completes_in_seven_moves() {
    let mut controller = CrossingController::new(Side::Left);

    for (i, kind) in STANDARD_SOLUTION.iter().enumerate() {
        assert!(!controller.is_complete(), "completed early at move {}", i);
        let event = cross_with(&mut controller, *kind);
        assert!(event.is_committed(), "move {} rejected: {:?}", i + 1, event);
        assert_world_sound(&controller.snapshot());
    }

    assert_eq!(controller.state(), PuzzleState::Complete);
    assert_eq!(controller.move_count(), 7);
    assert_eq!(controller.boat_side(), Side::Right);
    assert_eq!(controller.shore(Side::Right).count(), 3);
    assert!(controller.shore(Side::Left).is_empty());
}

#[test]
fn test_no_moves_after_completion() {
    let mut controller = CrossingController::new(Side::Left);
    for kind in STANDARD_SOLUTION {
        cross_with(&mut controller, kind);
    }

    assert_eq!(
        controller.attempt(Selection::Alone),
        Err(RiverCrossError::PuzzleAlreadyComplete { moves: 7 })
    );
}

// ===== ILLEGAL SEQUENCES =====

#[test]
fn test_wolf_left_with_goat_is_rejected() {
    let mut controller = CrossingController::new(Side::Left);
    assert!(cross_with(&mut controller, Some(Goat)).is_committed());
    assert!(cross_with(&mut controller, None).is_committed());
    assert!(cross_with(&mut controller, Some(Wolf)).is_committed());

    // Back on the right with goat and wolf; rowing home alone abandons them.
    let before = controller.snapshot();
    let event = cross_with(&mut controller, None);

    assert_eq!(
        event,
        CrossingEvent::MoveRejected {
            reason: Violation::GoatEatenByWolf
        }
    );
    assert_eq!(controller.snapshot(), before);
}

#[test]
fn test_taking_wolf_first_is_rejected() {
    let mut controller = CrossingController::new(Side::Left);
    let before = controller.snapshot();

    assert_eq!(
        cross_with(&mut controller, Some(Wolf)),
        CrossingEvent::MoveRejected {
            reason: Violation::CabbageEatenByGoat
        }
    );
    assert_eq!(
        cross_with(&mut controller, Some(Cabbage)),
        CrossingEvent::MoveRejected {
            reason: Violation::GoatEatenByWolf
        }
    );
    assert_eq!(controller.snapshot(), before);
}

#[test]
fn test_repeated_rejection_is_idempotent() {
    let mut controller = CrossingController::new(Side::Left);
    let before = controller.snapshot();

    for _ in 0..5 {
        assert_eq!(
            controller.attempt(Selection::Alone),
            Ok(CrossingEvent::MoveRejected {
                reason: Violation::GoatEatenByWolf
            })
        );
    }

    assert_eq!(controller.snapshot(), before);
    assert!(controller.history().is_empty());
}

#[test]
fn test_arrival_shore_is_not_checked() {
    let mut controller = CrossingController::new(Side::Left);
    cross_with(&mut controller, Some(Goat));
    cross_with(&mut controller, None);

    // Wolf lands next to the goat; the man is there, so this commits.
    let event = cross_with(&mut controller, Some(Wolf));
    assert_eq!(
        event,
        CrossingEvent::MoveCommitted {
            direction: Direction::LeftToRight,
            passenger: Some(Passenger::wolf()),
        }
    );
    assert!(controller.shore(Side::Right).contains_kind(Goat));
    assert!(controller.shore(Side::Right).contains_kind(Wolf));
}

// ===== SYMMETRY =====

#[test]
fn test_mirrored_start_solves_in_same_length() {
    let mut controller = CrossingController::new(Side::Right);
    assert_eq!(controller.boat_side(), Side::Right);

    let directions: Vec<Direction> = STANDARD_SOLUTION
        .iter()
        .map(|kind| match cross_with(&mut controller, *kind) {
            CrossingEvent::MoveCommitted { direction, .. } => direction,
            other => panic!("unexpected {:?}", other),
        })
        .collect();

    assert!(controller.is_complete());
    assert_eq!(controller.move_count(), 7);
    assert_eq!(controller.shore(Side::Left).count(), 3);
    assert_eq!(directions[0], Direction::RightToLeft);
    assert_eq!(directions[1], Direction::LeftToRight);
}

#[test]
fn test_loaded_start_shore_is_in_progress() {
    let left =
        Shore::with_passengers([Passenger::goat(), Passenger::wolf(), Passenger::cabbage()]);
    let controller =
        CrossingController::with_distribution(left, Shore::new(), Side::Left, Side::Left).unwrap();
    assert!(!controller.is_complete());
}

// ===== TURN PROTOCOL =====

#[test]
fn test_play_turn_retries_until_commit() {
    let mut controller = CrossingController::new(Side::Left);
    // 4 = alone (rejected), 2 = wolf (rejected), 1 = goat (committed)
    let mut io = ScriptedIo::new([4, 2, 1]);

    let event = controller.play_turn(&mut io).unwrap();

    assert!(event.is_committed());
    assert_eq!(io.consumed(), 3);
    assert_eq!(
        io.events(),
        &[
            CrossingEvent::MoveRejected {
                reason: Violation::GoatEatenByWolf
            },
            CrossingEvent::MoveRejected {
                reason: Violation::CabbageEatenByGoat
            },
            CrossingEvent::MoveCommitted {
                direction: Direction::LeftToRight,
                passenger: Some(Passenger::goat()),
            },
        ]
    );
}

#[test]
fn test_run_replays_script_and_reports_solved() {
    let mut controller = CrossingController::new(Side::Left);
    let mut io = ScriptedIo::new(standard_script(Side::Left));

    let moves = controller.run(&mut io).unwrap();

    assert_eq!(moves, 7);
    assert_eq!(io.remaining(), 0);
    assert_eq!(
        io.events().last(),
        Some(&CrossingEvent::PuzzleSolved { moves: 7 })
    );
    let committed = io.events().iter().filter(|e| e.is_committed()).count();
    assert_eq!(committed, 7);
}

#[test]
fn test_run_surfaces_exhausted_script() {
    let mut controller = CrossingController::new(Side::Left);
    let mut io = ScriptedIo::new([1, 2]);

    assert_eq!(
        controller.run(&mut io),
        Err(RiverCrossError::ScriptExhausted { consumed: 2 })
    );
    assert_eq!(controller.move_count(), 2);
}

#[test]
fn test_empty_shore_offers_only_alone() {
    let mut controller = CrossingController::new(Side::Left);
    cross_with(&mut controller, Some(Goat));

    // Right shore holds only the goat: choices are 1 (goat) or 2 (alone).
    assert_eq!(controller.selection_range(), (1, 2));
    assert_eq!(controller.select(2), Ok(Selection::Alone));
    assert_eq!(
        controller.select(3),
        Err(RiverCrossError::SelectionOutOfRange { value: 3, max: 2 })
    );
}

// ===== CUSTOM DISTRIBUTIONS =====

#[test]
fn test_with_distribution_rejects_ferryman_on_shore() {
    let left = Shore::with_passengers([
        Passenger::man(),
        Passenger::goat(),
        Passenger::wolf(),
        Passenger::cabbage(),
    ]);

    match CrossingController::with_distribution(left, Shore::new(), Side::Left, Side::Left) {
        Err(RiverCrossError::InvalidDistribution { reason }) => {
            assert!(reason.contains("man"), "reason was {}", reason);
        }
        other => panic!("Expected InvalidDistribution, got {:?}", other.map(|c| c.snapshot())),
    }
}

#[test]
fn test_with_distribution_resumes_mid_game() {
    let left = Shore::with_passengers([Passenger::wolf(), Passenger::cabbage()]);
    let right = Shore::with_passengers([Passenger::goat()]);
    let mut controller =
        CrossingController::with_distribution(left, right, Side::Right, Side::Left).unwrap();

    for kind in &STANDARD_SOLUTION[1..] {
        assert!(cross_with(&mut controller, *kind).is_committed());
    }

    assert!(controller.is_complete());
    assert_eq!(controller.move_count(), 6);
}
