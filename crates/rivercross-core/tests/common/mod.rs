use rivercross_core::{CrossingController, CrossingEvent, PassengerKind, Side, WorldSnapshot};

use PassengerKind::{Cabbage, Goat, Wolf};

/// The standard seven-move solution, by kind (`None` = the man rows alone)
#[allow(dead_code)]
pub const STANDARD_SOLUTION: [Option<PassengerKind>; 7] = [
    Some(Goat),
    None,
    Some(Wolf),
    Some(Goat),
    Some(Cabbage),
    None,
    Some(Goat),
];

/// Resolve a kind to this turn's selection and attempt it
///
/// Panics if the kind is not on the shore the boat is docked at.
#[allow(dead_code)]
pub fn cross_with(
    controller: &mut CrossingController,
    kind: Option<PassengerKind>,
) -> CrossingEvent {
    let selection = controller
        .selection_for(kind)
        .unwrap_or_else(|| panic!("{:?} is not on the departing shore", kind));
    controller.attempt(selection).unwrap()
}

/// Raw 1-based choices that play the standard solution from `start`
#[allow(dead_code)]
pub fn standard_script(start: Side) -> Vec<usize> {
    let mut controller = CrossingController::new(start);
    STANDARD_SOLUTION
        .iter()
        .map(|kind| {
            let count = controller.from_shore().count();
            let selection = controller.selection_for(*kind).unwrap();
            controller.attempt(selection).unwrap();
            selection.encode(count)
        })
        .collect()
}

/// Assert conservation and the unsupervised-safety rule on a snapshot
#[allow(dead_code)]
pub fn assert_world_sound(snapshot: &WorldSnapshot) {
    assert_eq!(
        snapshot.left.count() + snapshot.right.count(),
        3,
        "passengers must be conserved: {:?}",
        snapshot
    );
    for kind in PassengerKind::TRANSPORTABLE {
        assert!(
            snapshot.left.contains_kind(kind) != snapshot.right.contains_kind(kind),
            "{} must be on exactly one shore",
            kind
        );
    }
    let unsupervised = match snapshot.boat_side {
        Side::Left => &snapshot.right,
        Side::Right => &snapshot.left,
    };
    assert!(
        unsupervised.is_safe_without_supervisor().is_safe(),
        "unsupervised shore holds a forbidden pair: {:?}",
        snapshot
    );
}
