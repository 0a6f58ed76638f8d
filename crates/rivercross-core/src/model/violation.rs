use serde::{Deserialize, Serialize};

/// Why a crossing was refused
///
/// Produced when the shore being departed from would be left holding a
/// forbidden pair without the man to watch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    GoatEatenByWolf,
    CabbageEatenByGoat,
}

impl Violation {
    /// Stable machine-readable key
    pub fn key(self) -> &'static str {
        match self {
            Violation::GoatEatenByWolf => "goat_eaten_by_wolf",
            Violation::CabbageEatenByGoat => "cabbage_eaten_by_goat",
        }
    }

    /// Human-readable explanation, suitable for prompting a retry
    pub fn message(self) -> &'static str {
        match self {
            Violation::GoatEatenByWolf => "The wolf will eat the goat. Choose again.",
            Violation::CabbageEatenByGoat => "The goat will eat the cabbage. Choose again.",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
