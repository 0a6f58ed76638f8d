//! The predator/prey rule
//!
//! A set of passengers left on a shore without the man is unsafe when it
//! holds both members of a forbidden pair. The rule is applied to actual
//! shore contents and to the hypothetical contents that would remain after
//! a passenger boards.

use std::collections::BTreeSet;

use crate::model::{PassengerKind, Violation};

/// A pair of kinds that must never share an unsupervised shore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenPair {
    pub eater: PassengerKind,
    pub eaten: PassengerKind,
    pub violation: Violation,
}

/// Checked in order; the first match decides the reported reason
pub const FORBIDDEN_PAIRS: [ForbiddenPair; 2] = [
    ForbiddenPair {
        eater: PassengerKind::Wolf,
        eaten: PassengerKind::Goat,
        violation: Violation::GoatEatenByWolf,
    },
    ForbiddenPair {
        eater: PassengerKind::Goat,
        eaten: PassengerKind::Cabbage,
        violation: Violation::CabbageEatenByGoat,
    },
];

/// Verdict of a safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Unsafe(Violation),
}

impl Safety {
    pub fn is_safe(self) -> bool {
        matches!(self, Safety::Safe)
    }

    pub fn violation(self) -> Option<Violation> {
        match self {
            Safety::Safe => None,
            Safety::Unsafe(v) => Some(v),
        }
    }
}

/// Evaluate a set of kinds left on a shore without the man
///
/// Containment of both pair members is necessary and sufficient, so the
/// check stays correct if more kinds are ever added to the puzzle.
pub fn check_unsupervised<I>(kinds: I) -> Safety
where
    I: IntoIterator<Item = PassengerKind>,
{
    let present: BTreeSet<PassengerKind> = kinds.into_iter().collect();

    FORBIDDEN_PAIRS
        .iter()
        .find(|pair| present.contains(&pair.eater) && present.contains(&pair.eaten))
        .map_or(Safety::Safe, |pair| Safety::Unsafe(pair.violation))
}
