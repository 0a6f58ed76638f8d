//! Plain-text rendering of the river and of crossing events
//!
//! Layout: a 30-column shore on each side of a 15-column river. The boat
//! hugs the shore it is docked at.

use rivercross_core::{CrossingEvent, Direction, Passenger, Shore, Side, WorldSnapshot};

const SHORE_WIDTH: usize = 30;
const RIVER_WIDTH: usize = 15;

fn shore_column(shore: &Shore) -> String {
    shore
        .iter()
        .map(Passenger::label)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Both shores with the boat docked
pub fn board(snapshot: &WorldSnapshot, ferryman: &Passenger) -> String {
    let river = match snapshot.boat_side {
        Side::Left => format!("{:<width$}", ferryman.label(), width = RIVER_WIDTH),
        Side::Right => format!("{:>width$}", ferryman.label(), width = RIVER_WIDTH),
    };

    format!(
        "{:<width$}{}{:<width$}",
        shore_column(&snapshot.left),
        river,
        shore_column(&snapshot.right),
        width = SHORE_WIDTH
    )
    .trim_end()
    .to_string()
}

/// The boat mid-river, drawn under the river column
pub fn crossing(direction: Direction, ferryman: &Passenger, passenger: Option<&Passenger>) -> String {
    let mut crew = ferryman.label().to_string();
    if let Some(p) = passenger {
        crew.push(' ');
        crew.push_str(p.label());
    }

    let river = match direction {
        Direction::LeftToRight => format!("{:<width$}", format!("{} ->", crew), width = RIVER_WIDTH),
        Direction::RightToLeft => format!("{:>width$}", format!("<- {}", crew), width = RIVER_WIDTH),
    };

    format!("{:width$}{}", "", river, width = SHORE_WIDTH)
        .trim_end()
        .to_string()
}

/// One human-readable line per event
pub fn event_line(event: &CrossingEvent, ferryman: &Passenger) -> String {
    match event {
        CrossingEvent::MoveCommitted {
            direction,
            passenger: Some(p),
        } => format!("{} takes the {} {}", ferryman, p, direction),
        CrossingEvent::MoveCommitted {
            direction,
            passenger: None,
        } => format!("{} crosses alone {}", ferryman, direction),
        CrossingEvent::MoveRejected { reason } => reason.message().to_string(),
        CrossingEvent::PuzzleSolved { moves } => format!("Puzzle solved in {} moves.", moves),
    }
}
