//! Decoding of the IO layer's numeric choice
//!
//! The IO layer offers `count + 1` numbered options for the shore the boat
//! is docked at: one per passenger (1-based), followed by "cross alone".

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RiverCrossError};

/// What the man takes across on this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The passenger at this 1-based position on the departing shore
    Passenger(usize),
    /// Nobody; the man rows alone
    Alone,
}

impl Selection {
    /// Decode a raw 1-based choice against a shore holding `count` passengers
    ///
    /// # Errors
    /// * `SelectionOutOfRange` - If `value` is outside `1..=count + 1`
    pub fn decode(value: usize, count: usize) -> Result<Self> {
        let max = count + 1;
        match value {
            v if v == max => Ok(Selection::Alone),
            v if (1..max).contains(&v) => Ok(Selection::Passenger(v)),
            v => Err(RiverCrossError::SelectionOutOfRange { value: v, max }),
        }
    }

    /// The raw choice an IO layer would enter for this selection
    pub fn encode(self, count: usize) -> usize {
        match self {
            Selection::Passenger(position) => position,
            Selection::Alone => count + 1,
        }
    }
}
