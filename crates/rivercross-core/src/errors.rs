use thiserror::Error;

use crate::model::{PassengerKind, Side};

/// Result type alias using RiverCrossError
pub type Result<T> = std::result::Result<T, RiverCrossError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every fatal error the crossing kernel can raise.
/// Rule violations (a wolf left with a goat) are not errors; they travel as
/// [`crate::events::CrossingEvent::MoveRejected`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller contract
    IndexOutOfRange,
    ContractViolation,
    SelectionOutOfRange,
    PuzzleComplete,

    // World state
    InvalidDistribution,
    InvariantViolation,

    // IO layer
    InvalidInput,
    InputExhausted,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::ContractViolation => "ERR_CONTRACT_VIOLATION",
            ExErrorKind::SelectionOutOfRange => "ERR_SELECTION_OUT_OF_RANGE",
            ExErrorKind::PuzzleComplete => "ERR_PUZZLE_COMPLETE",
            ExErrorKind::InvalidDistribution => "ERR_INVALID_DISTRIBUTION",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InputExhausted => "ERR_INPUT_EXHAUSTED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used in logs and CLI output, plus optional
/// context about where in the puzzle the failure happened.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<Side>,
    passenger: Option<PassengerKind>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            passenger: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add shore context
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add passenger context
    pub fn with_passenger(mut self, passenger: PassengerKind) -> Self {
        self.passenger = Some(passenger);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn passenger(&self) -> Option<PassengerKind> {
        self.passenger
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(passenger) = self.passenger {
            write!(f, " (passenger: {})", passenger)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for crossing operations
///
/// Every variant is fatal for the current run: either a caller broke the
/// selection contract, the world state is corrupt, or the IO layer failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiverCrossError {
    // ===== Caller Contract =====
    /// Shore index outside `[0, count)`
    #[error("Index {index} out of range for shore with {count} passengers")]
    IndexOutOfRange { index: usize, count: usize },

    /// A passenger was named for removal from a shore that does not hold it
    #[error("{passenger} is not on this shore")]
    PassengerNotOnShore { passenger: PassengerKind },

    /// The IO layer returned a selection outside `[1, max]`
    #[error("Selection {value} is outside the valid range 1..={max}")]
    SelectionOutOfRange { value: usize, max: usize },

    /// A move was attempted after every passenger already crossed
    #[error("Puzzle already solved after {moves} moves")]
    PuzzleAlreadyComplete { moves: usize },

    // ===== World State =====
    /// A starting distribution breaks the puzzle's invariants
    #[error("Invalid starting distribution: {reason}")]
    InvalidDistribution { reason: String },

    /// A committed move left the world in an impossible state
    #[error("Invariant violation on the {side} shore: {reason}")]
    InvariantViolation { side: Side, reason: String },

    // ===== IO Layer =====
    /// Scripted input ran out before the puzzle was solved
    #[error("Input exhausted after {consumed} selections")]
    ScriptExhausted { consumed: usize },

    /// Input could not be parsed as a selection
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Underlying reader or writer failed
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<std::io::Error> for RiverCrossError {
    fn from(err: std::io::Error) -> Self {
        RiverCrossError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RiverCrossError {
    fn from(err: serde_json::Error) -> Self {
        RiverCrossError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<RiverCrossError> for ExError {
    fn from(err: RiverCrossError) -> Self {
        match err {
            RiverCrossError::IndexOutOfRange { index, count } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_op("shore_get")
                    .with_message(format!("index {} with {} passengers", index, count))
            }

            RiverCrossError::PassengerNotOnShore { passenger } => {
                ExError::new(ExErrorKind::ContractViolation)
                    .with_op("is_safe_if_removed")
                    .with_passenger(passenger)
                    .with_message("Passenger is not on the departing shore")
            }

            RiverCrossError::SelectionOutOfRange { value, max } => {
                ExError::new(ExErrorKind::SelectionOutOfRange)
                    .with_op("select")
                    .with_message(format!("{} not in 1..={}", value, max))
            }

            RiverCrossError::PuzzleAlreadyComplete { moves } => {
                ExError::new(ExErrorKind::PuzzleComplete)
                    .with_op("attempt")
                    .with_message(format!("Solved after {} moves", moves))
            }

            RiverCrossError::InvalidDistribution { reason } => {
                ExError::new(ExErrorKind::InvalidDistribution)
                    .with_op("with_distribution")
                    .with_message(reason)
            }

            RiverCrossError::InvariantViolation { side, reason } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_side(side)
                    .with_message(reason)
            }

            RiverCrossError::ScriptExhausted { consumed } => {
                ExError::new(ExErrorKind::InputExhausted)
                    .with_op("request_selection")
                    .with_message(format!("Ran out after {} selections", consumed))
            }

            RiverCrossError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            RiverCrossError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            RiverCrossError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let kinds = [
            ExErrorKind::IndexOutOfRange,
            ExErrorKind::ContractViolation,
            ExErrorKind::SelectionOutOfRange,
            ExErrorKind::PuzzleComplete,
            ExErrorKind::InvalidDistribution,
            ExErrorKind::InvariantViolation,
            ExErrorKind::InvalidInput,
            ExErrorKind::InputExhausted,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::ContractViolation)
            .with_op("is_safe_if_removed")
            .with_side(Side::Left)
            .with_passenger(PassengerKind::Wolf)
            .with_message("missing");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_CONTRACT_VIOLATION]"));
        assert!(rendered.contains("is_safe_if_removed"));
        assert!(rendered.contains("(side: left)"));
        assert!(rendered.contains("(passenger: Wolf)"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::Io).with_message("pipe closed");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);

        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(std::error::Error::source(&outer).is_some());
    }
}
