use crate::errors::{Result, RiverCrossError};
use crate::model::{Shore, Side};

use super::invariants;

/// Validate a complete world state
///
/// Runs all invariant checks and returns an error if any violations are found:
///
/// 1. The man is not stored on either shore
/// 2. No kind appears twice
/// 3. Every transportable kind is ashore somewhere (nobody is left in the boat)
/// 4. The shore without the boat holds no forbidden pair
///
/// # Errors
/// Returns the first `InvariantViolation` encountered. For exhaustive
/// reporting, call the individual invariant functions directly.
pub fn validate_world(left: &Shore, right: &Shore, boat_side: Side) -> Result<()> {
    if let Some(side) = invariants::find_ferryman_on_shore(left, right).first() {
        return Err(RiverCrossError::InvariantViolation {
            side: *side,
            reason: "the man is stored as a shore passenger".to_string(),
        });
    }

    if let Some((side, kind)) = invariants::find_duplicate_kinds(left, right).first() {
        return Err(RiverCrossError::InvariantViolation {
            side: *side,
            reason: format!("{} appears more than once", kind),
        });
    }

    if let Some(kind) = invariants::find_missing_kinds(left, right).first() {
        return Err(RiverCrossError::InvariantViolation {
            side: boat_side,
            reason: format!("{} is on neither shore", kind),
        });
    }

    if let Some((side, violation)) =
        invariants::find_unsupervised_violations(left, right, boat_side).first()
    {
        return Err(RiverCrossError::InvariantViolation {
            side: *side,
            reason: format!("unsupervised shore: {}", violation.key()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Passenger;

    #[test]
    fn test_valid_world() {
        let left = Shore::with_passengers([Passenger::wolf(), Passenger::cabbage()]);
        let right = Shore::with_passengers([Passenger::goat()]);
        assert!(validate_world(&left, &right, Side::Right).is_ok());
        assert!(validate_world(&left, &right, Side::Left).is_ok());
    }

    #[test]
    fn test_unsupervised_pair_rejected() {
        let left = Shore::with_passengers([Passenger::goat(), Passenger::cabbage()]);
        let right = Shore::with_passengers([Passenger::wolf()]);

        match validate_world(&left, &right, Side::Right) {
            Err(RiverCrossError::InvariantViolation { side, reason }) => {
                assert_eq!(side, Side::Left);
                assert!(reason.contains("cabbage_eaten_by_goat"));
            }
            other => panic!("Expected InvariantViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_passenger_rejected() {
        let left = Shore::with_passengers([Passenger::goat()]);
        let right = Shore::with_passengers([Passenger::wolf()]);
        assert!(matches!(
            validate_world(&left, &right, Side::Left),
            Err(RiverCrossError::InvariantViolation { .. })
        ));
    }
}
