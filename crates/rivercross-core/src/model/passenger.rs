use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The four kinds of entity in the puzzle
///
/// `Man` rows the boat. He is never carried as cargo and is never subject
/// to the forbidden-pair rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PassengerKind {
    Man,
    Goat,
    Wolf,
    Cabbage,
}

impl PassengerKind {
    /// Kinds that ride in the boat next to the man, in canonical shore order
    pub const TRANSPORTABLE: [PassengerKind; 3] =
        [PassengerKind::Goat, PassengerKind::Wolf, PassengerKind::Cabbage];

    pub fn name(self) -> &'static str {
        match self {
            PassengerKind::Man => "Man",
            PassengerKind::Goat => "Goat",
            PassengerKind::Wolf => "Wolf",
            PassengerKind::Cabbage => "Cabbage",
        }
    }

    pub fn is_transportable(self) -> bool {
        self != PassengerKind::Man
    }
}

impl std::fmt::Display for PassengerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An entity on a shore or in the boat
///
/// Identity is the kind alone: there is one of each in the whole puzzle, so
/// two passengers with the same kind are the same passenger regardless of
/// label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    kind: PassengerKind,
    label: String,
}

impl Passenger {
    /// Create a passenger labelled with its kind's name
    pub fn new(kind: PassengerKind) -> Self {
        Self {
            kind,
            label: kind.name().to_string(),
        }
    }

    pub fn with_label(kind: PassengerKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    pub fn man() -> Self {
        Self::new(PassengerKind::Man)
    }

    pub fn goat() -> Self {
        Self::new(PassengerKind::Goat)
    }

    pub fn wolf() -> Self {
        Self::new(PassengerKind::Wolf)
    }

    pub fn cabbage() -> Self {
        Self::new(PassengerKind::Cabbage)
    }

    pub fn kind(&self) -> PassengerKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Passenger {}

impl Hash for Passenger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl From<PassengerKind> for Passenger {
    fn from(kind: PassengerKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for Passenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
