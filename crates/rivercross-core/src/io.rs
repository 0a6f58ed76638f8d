//! The seam between the crossing kernel and whatever presents it
//!
//! The controller never reads input or renders output itself. It asks a
//! [`CrossingIo`] for a choice and reports what happened.

use std::collections::VecDeque;

use crate::errors::{Result, RiverCrossError};
use crate::events::CrossingEvent;
use crate::model::Shore;

/// Presentation/IO collaborator driven by the controller
pub trait CrossingIo {
    /// Ask for a choice in `1..=max` for the shore the boat is docked at
    ///
    /// Implementations own prompting and re-prompting; the returned value
    /// must lie in range.
    ///
    /// # Errors
    /// Fails when no further input can be obtained.
    fn request_selection(&mut self, from: &Shore, max: usize) -> Result<usize>;

    /// Receive the outcome of an attempt
    fn notify(&mut self, event: &CrossingEvent);
}

impl<T: CrossingIo + ?Sized> CrossingIo for &mut T {
    fn request_selection(&mut self, from: &Shore, max: usize) -> Result<usize> {
        (**self).request_selection(from, max)
    }

    fn notify(&mut self, event: &CrossingEvent) {
        (**self).notify(event)
    }
}

/// Replays a fixed list of choices and records every notification
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    selections: VecDeque<usize>,
    consumed: usize,
    events: Vec<CrossingEvent>,
}

impl ScriptedIo {
    pub fn new<I>(selections: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            selections: selections.into_iter().collect(),
            consumed: 0,
            events: Vec::new(),
        }
    }

    /// Parse whitespace- or comma-separated 1-based choices
    ///
    /// # Errors
    /// * `InvalidInput` - If a token is not a non-negative integer
    pub fn parse(script: &str) -> Result<Self> {
        let selections = script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<usize>()
                    .map_err(|_| RiverCrossError::InvalidInput {
                        reason: format!("'{}' is not a selection number", token),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(selections))
    }

    /// Append more choices to the end of the script
    pub fn extend<I>(&mut self, selections: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.selections.extend(selections);
    }

    pub fn events(&self) -> &[CrossingEvent] {
        &self.events
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.selections.len()
    }
}

impl CrossingIo for ScriptedIo {
    fn request_selection(&mut self, _from: &Shore, max: usize) -> Result<usize> {
        let value = self
            .selections
            .pop_front()
            .ok_or(RiverCrossError::ScriptExhausted {
                consumed: self.consumed,
            })?;
        self.consumed += 1;

        // A script cannot be re-prompted, so a bad entry ends the run.
        if !(1..=max).contains(&value) {
            return Err(RiverCrossError::InvalidInput {
                reason: format!(
                    "selection #{} is {}, expected 1..={}",
                    self.consumed, value, max
                ),
            });
        }

        Ok(value)
    }

    fn notify(&mut self, event: &CrossingEvent) {
        self.events.push(event.clone());
    }
}
