//! Test support utilities for the dots workspace
//!
//! Shared, crate-agnostic helpers used by integration tests: one-time logging
//! initialisation and generators for unique player names.

pub mod logging;
pub mod unique_helpers;
