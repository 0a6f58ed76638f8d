//! Semantic events and observable state handed to the IO layer

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{Passenger, Shore, Side, Violation};

/// Which way the boat crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Direction of a crossing that departs from `side`
    pub fn departing(side: Side) -> Self {
        match side {
            Side::Left => Direction::LeftToRight,
            Side::Right => Direction::RightToLeft,
        }
    }

    pub fn origin(self) -> Side {
        match self {
            Direction::LeftToRight => Side::Left,
            Direction::RightToLeft => Side::Right,
        }
    }

    pub fn destination(self) -> Side {
        self.origin().opposite()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin(), self.destination())
    }
}

/// Lifecycle of a crossing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleState {
    InProgress,
    Complete,
}

/// Outcome notification sent to the IO layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CrossingEvent {
    /// The boat crossed; `passenger` is `None` when the man rowed alone
    MoveCommitted {
        direction: Direction,
        passenger: Option<Passenger>,
    },
    /// The choice would leave a forbidden pair behind; nothing moved
    MoveRejected { reason: Violation },
    /// Every passenger reached the far shore
    PuzzleSolved { moves: usize },
}

impl CrossingEvent {
    pub fn is_committed(&self) -> bool {
        matches!(self, CrossingEvent::MoveCommitted { .. })
    }

    /// Encode as a single JSON object
    ///
    /// # Errors
    /// * `Serialization` - If encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One entry of the move history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedMove {
    /// 1-based move number
    pub number: usize,
    pub direction: Direction,
    pub passenger: Option<Passenger>,
}

/// Value copy of everything observable about a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub left: Shore,
    pub right: Shore,
    pub boat_side: Side,
    pub start_side: Side,
    pub state: PuzzleState,
    pub moves: usize,
}

impl WorldSnapshot {
    /// # Errors
    /// * `Serialization` - If encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
