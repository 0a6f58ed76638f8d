use serde::{Deserialize, Serialize};

use crate::errors::{Result, RiverCrossError};
use crate::model::{Passenger, PassengerKind};
use crate::rules::safety::{check_unsupervised, Safety};

/// The passengers waiting on one bank of the river
///
/// Ordering carries no meaning for the puzzle; it only gives the IO layer a
/// stable numbering to offer as choices. Contents change only through
/// [`Shore::add`] and [`Shore::remove`], which the controller calls as a pair
/// after the move has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shore {
    passengers: Vec<Passenger>,
}

impl Shore {
    /// Create an empty shore
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shore holding the given passengers in the given order
    pub fn with_passengers<I>(passengers: I) -> Self
    where
        I: IntoIterator<Item = Passenger>,
    {
        Self {
            passengers: passengers.into_iter().collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Passenger at a 0-based position
    ///
    /// # Errors
    /// * `IndexOutOfRange` - If `index >= count()`
    pub fn get(&self, index: usize) -> Result<&Passenger> {
        self.passengers
            .get(index)
            .ok_or(RiverCrossError::IndexOutOfRange {
                index,
                count: self.passengers.len(),
            })
    }

    pub fn contains(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }

    pub fn contains_kind(&self, kind: PassengerKind) -> bool {
        self.passengers.iter().any(|p| p.kind() == kind)
    }

    /// 0-based position of a passenger, if present
    pub fn position_of(&self, passenger: &Passenger) -> Option<usize> {
        self.passengers.iter().position(|p| p == passenger)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.passengers.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = PassengerKind> + '_ {
        self.passengers.iter().map(Passenger::kind)
    }

    /// Put a passenger ashore. No rule is checked here.
    pub fn add(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    /// Take a passenger off the shore
    ///
    /// Returns `false` if the passenger was not here.
    pub fn remove(&mut self, passenger: &Passenger) -> bool {
        match self.position_of(passenger) {
            Some(index) => {
                self.passengers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Can the man leave this shore with nobody in the boat?
    pub fn is_safe_without_supervisor(&self) -> Safety {
        check_unsupervised(self.kinds())
    }

    /// Can the man leave this shore taking `passenger` with him?
    ///
    /// Evaluates the passengers that would remain, without mutating.
    ///
    /// # Errors
    /// * `PassengerNotOnShore` - If `passenger` is not on this shore. This is a
    ///   caller bug, not a rule violation.
    pub fn is_safe_if_removed(&self, passenger: &Passenger) -> Result<Safety> {
        if !self.contains(passenger) {
            return Err(RiverCrossError::PassengerNotOnShore {
                passenger: passenger.kind(),
            });
        }

        Ok(check_unsupervised(
            self.passengers
                .iter()
                .filter(|p| *p != passenger)
                .map(Passenger::kind),
        ))
    }
}

/// Numbered menu, one `"{position} {label}"` line per passenger
impl std::fmt::Display for Shore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, passenger) in self.passengers.iter().enumerate() {
            writeln!(f, "{} {}", index + 1, passenger)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Shore {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.passengers.iter()
    }
}
