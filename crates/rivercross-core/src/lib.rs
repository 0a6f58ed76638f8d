//! River crossing core - the wolf, goat and cabbage puzzle kernel
//!
//! This crate provides the state machine for ferrying a goat, a wolf and a
//! cabbage across a river without leaving a forbidden pair unsupervised:
//! - Passenger, Side and Shore models
//! - The forbidden-pair safety rule and whole-world invariant checks
//! - A turn-by-turn controller driven through the `CrossingIo` port
//! - Structured events and snapshots for the presentation layer
//! - The error and logging facilities shared with front ends
//!
//! Rendering, prompting and input parsing belong to the IO layer.

pub mod controller;
pub mod errors;
pub mod events;
pub mod io;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod selection;

pub use rivercross_core_types::schema;

// Re-export commonly used types
pub use controller::CrossingController;
pub use errors::{ExError, ExErrorKind, Result, RiverCrossError};
pub use events::{CommittedMove, CrossingEvent, Direction, PuzzleState, WorldSnapshot};
pub use io::{CrossingIo, ScriptedIo};
pub use model::{Passenger, PassengerKind, Shore, Side, Violation};
pub use rules::safety::Safety;
pub use selection::Selection;
