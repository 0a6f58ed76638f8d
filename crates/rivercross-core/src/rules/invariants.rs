use std::collections::BTreeMap;

use crate::model::{PassengerKind, Shore, Side, Violation};
use crate::rules::safety::check_unsupervised;

fn shores<'a>(left: &'a Shore, right: &'a Shore) -> [(Side, &'a Shore); 2] {
    [(Side::Left, left), (Side::Right, right)]
}

/// Sides whose shore holds the man
///
/// The man travels with the boat and is never owned by a shore, so any hit
/// here is a corrupt state.
pub fn find_ferryman_on_shore(left: &Shore, right: &Shore) -> Vec<Side> {
    shores(left, right)
        .into_iter()
        .filter(|(_, shore)| shore.contains_kind(PassengerKind::Man))
        .map(|(side, _)| side)
        .collect()
}

/// Kinds that appear more than once across both shores
///
/// Returns list of (side of the second occurrence, kind) tuples
pub fn find_duplicate_kinds(left: &Shore, right: &Shore) -> Vec<(Side, PassengerKind)> {
    let mut seen: BTreeMap<PassengerKind, usize> = BTreeMap::new();
    let mut duplicates = Vec::new();

    for (side, shore) in shores(left, right) {
        for kind in shore.kinds() {
            let count = seen.entry(kind).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push((side, kind));
            }
        }
    }

    duplicates
}

/// Transportable kinds present on neither shore
pub fn find_missing_kinds(left: &Shore, right: &Shore) -> Vec<PassengerKind> {
    PassengerKind::TRANSPORTABLE
        .into_iter()
        .filter(|kind| !left.contains_kind(*kind) && !right.contains_kind(*kind))
        .collect()
}

/// Forbidden pairs on the shore the boat is not docked at
///
/// The shore at `boat_side` is supervised and never reported.
pub fn find_unsupervised_violations(
    left: &Shore,
    right: &Shore,
    boat_side: Side,
) -> Vec<(Side, Violation)> {
    shores(left, right)
        .into_iter()
        .filter(|(side, _)| *side != boat_side)
        .filter_map(|(side, shore)| {
            check_unsupervised(shore.kinds())
                .violation()
                .map(|v| (side, v))
        })
        .collect()
}

/// Number of transportable passengers ashore on either side
pub fn passenger_total(left: &Shore, right: &Shore) -> usize {
    left.kinds()
        .chain(right.kinds())
        .filter(|k| k.is_transportable())
        .count()
}
