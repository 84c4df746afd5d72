//! Error types for the Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Computation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month number: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A month number outside 1-12 was supplied.
    #[error("Invalid month number: {month} (expected 1-12)")]
    InvalidMonth {
        /// The offending month number.
        month: u32,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// An upstream feed required for a computation was not available.
    ///
    /// Aggregation must surface this rather than report a zeroed summary as
    /// if it had been verified against real attendance data.
    #[error("Upstream feed unavailable: {feed}")]
    DataUnavailable {
        /// The name of the missing feed (e.g. "attendance", "leave").
        feed: String,
    },

    /// A raw payroll object was too degenerate to normalize meaningfully.
    #[error("Malformed payroll record: {message}")]
    MalformedRecord {
        /// A description of what made the record malformed.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
