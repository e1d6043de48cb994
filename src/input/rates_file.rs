//! Rate-table file parsing.
//!
//! One rate band per line: `DD,HH:MM-HH:MM,RATE`, comma-separated, where
//! `DD` is a two-letter day code and `RATE` a decimal hourly amount.
//! Blank lines are ignored.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RateInterval;

use super::worked_hours::read_file;
use super::{parse_clock_range, parse_day_code};

/// A source of rate intervals, mirroring [`InputProcessor`] on the rates
/// side of the run.
///
/// [`InputProcessor`]: super::InputProcessor
pub trait RateProvider {
    /// The parsed rate intervals, in input order.
    fn rates(&self) -> EngineResult<Vec<RateInterval>>;
}

/// Reads rate intervals from a text file.
#[derive(Debug, Clone)]
pub struct FileRateProvider {
    path: PathBuf,
}

impl FileRateProvider {
    /// Creates a provider for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileRateProvider { path: path.into() }
    }

    /// The path this provider reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateProvider for FileRateProvider {
    fn rates(&self) -> EngineResult<Vec<RateInterval>> {
        let text = read_file(&self.path)?;
        parse_rates(&text)
    }
}

/// Parses the full rates text. Blank lines are ignored.
///
/// # Errors
///
/// - [`EngineError::InvalidDayCode`] for an unknown day token.
/// - [`EngineError::MalformedRateLine`] for a line missing fields, with
///   an unparsable clock range, or with an unparsable rate.
pub fn parse_rates(text: &str) -> EngineResult<Vec<RateInterval>> {
    let mut rates = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rates.push(parse_rate_line(line)?);
    }
    debug!(rates = rates.len(), "parsed rate table input");
    Ok(rates)
}

fn parse_rate_line(line: &str) -> EngineResult<RateInterval> {
    let malformed = || EngineError::MalformedRateLine {
        line: line.to_string(),
    };

    let mut fields = line.split(',');
    let day_field = fields.next().ok_or_else(malformed)?;
    let range_field = fields.next().ok_or_else(malformed)?;
    let rate_field = fields.next().ok_or_else(malformed)?;

    let day = parse_day_code(day_field.trim())?;
    let hours = parse_clock_range(range_field).ok_or_else(malformed)?;
    let rate = Decimal::from_str(rate_field.trim()).map_err(|_| malformed())?;

    Ok(RateInterval { day, hours, rate })
}
