//! Error types for the pay calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll run. Every
//! error is fatal for the current run: the binary prints the message and
//! terminates with the exit code reported by [`EngineError::exit_code`].

use chrono::Weekday;
use thiserror::Error;

/// The main error type for the pay calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payday::error::EngineError;
///
/// let error = EngineError::InvalidDayCode {
///     code: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unrecognized day code 'XX'");
/// assert_eq!(error.exit_code(), 3);
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A two-letter day token was not one of MO, TU, WE, TH, FR, SA, SU.
    #[error("Unrecognized day code '{code}'")]
    InvalidDayCode {
        /// The token that failed to parse.
        code: String,
    },

    /// A worked-hours line was missing one of the required delimiters
    /// (`=`, `:`, or `-`).
    #[error("Malformed worked-hours line: '{line}'")]
    MalformedLineFormat {
        /// The offending line, as read.
        line: String,
    },

    /// A period token did not parse into a day code and four in-range
    /// time fields.
    #[error("Malformed period token '{token}'")]
    MalformedPeriod {
        /// The offending period token.
        token: String,
    },

    /// A rate-table line did not parse into day, interval, and rate fields.
    #[error("Malformed rate line: '{line}'")]
    MalformedRateLine {
        /// The offending line, as read.
        line: String,
    },

    /// A worked interval referenced a day with no configured rate
    /// intervals. This is a configuration error, not a zero-payment case.
    #[error("No pay rates configured for {day}")]
    NoRatesForDay {
        /// The day that has no rates.
        day: Weekday,
    },

    /// An input or rates file could not be read.
    #[error("Failed to read file '{path}': {message}")]
    FileRead {
        /// The path that could not be read.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

impl EngineError {
    /// The process exit code for this error.
    ///
    /// `2` for a line missing its delimiters, `3` for day-code and
    /// period/rate parsing. Missing rate configuration gets its own
    /// code so it is distinguishable from bad input.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::MalformedLineFormat { .. } => 2,
            EngineError::InvalidDayCode { .. }
            | EngineError::MalformedPeriod { .. }
            | EngineError::MalformedRateLine { .. } => 3,
            EngineError::NoRatesForDay { .. } => 4,
            EngineError::FileRead { .. } => 1,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
