//! Core types shared across the river crossing crates
//!
//! This crate provides foundational types used by the logging facility
//! and by any front end that drives a crossing session:
//!
//! - **Correlation types**: SessionId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::SessionId;
