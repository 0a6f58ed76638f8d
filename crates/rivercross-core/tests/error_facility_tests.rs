use rivercross_core::errors::{ExError, ExErrorKind, RiverCrossError};
use rivercross_core::{PassengerKind, Side};

#[test]
fn test_missing_passenger_is_contract_violation() {
    let err = RiverCrossError::PassengerNotOnShore {
        passenger: PassengerKind::Wolf,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ContractViolation);
    assert_eq!(ex_err.code(), "ERR_CONTRACT_VIOLATION");
    assert_eq!(ex_err.passenger(), Some(PassengerKind::Wolf));
    assert_eq!(ex_err.op(), Some("is_safe_if_removed"));
}

#[test]
fn test_selection_out_of_range_distinct_from_index() {
    let selection: ExError = RiverCrossError::SelectionOutOfRange { value: 9, max: 4 }.into();
    let index: ExError = RiverCrossError::IndexOutOfRange { index: 3, count: 3 }.into();

    assert_eq!(selection.kind(), ExErrorKind::SelectionOutOfRange);
    assert_eq!(index.kind(), ExErrorKind::IndexOutOfRange);
    assert_ne!(selection.code(), index.code());
    assert!(selection.message().contains("1..=4"));
}

#[test]
fn test_invariant_violation_carries_side() {
    let err = RiverCrossError::InvariantViolation {
        side: Side::Right,
        reason: "unsupervised shore: goat_eaten_by_wolf".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvariantViolation);
    assert_eq!(ex_err.side(), Some(Side::Right));
    assert!(ex_err.to_string().contains("(side: right)"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::IndexOutOfRange, "ERR_INDEX_OUT_OF_RANGE"),
        (ExErrorKind::ContractViolation, "ERR_CONTRACT_VIOLATION"),
        (ExErrorKind::SelectionOutOfRange, "ERR_SELECTION_OUT_OF_RANGE"),
        (ExErrorKind::PuzzleComplete, "ERR_PUZZLE_COMPLETE"),
        (ExErrorKind::InvalidDistribution, "ERR_INVALID_DISTRIBUTION"),
        (ExErrorKind::InvariantViolation, "ERR_INVARIANT_VIOLATION"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InputExhausted, "ERR_INPUT_EXHAUSTED"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_io_errors_convert() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    let err: RiverCrossError = io_err.into();

    assert!(matches!(err, RiverCrossError::Io { ref message } if message.contains("stdout closed")));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_IO");
}

#[test]
fn test_display_messages_are_user_facing() {
    let err = RiverCrossError::PuzzleAlreadyComplete { moves: 7 };
    assert_eq!(err.to_string(), "Puzzle already solved after 7 moves");

    let err = RiverCrossError::ScriptExhausted { consumed: 3 };
    assert_eq!(err.to_string(), "Input exhausted after 3 selections");
}
