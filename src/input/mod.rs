//! Input parsing for the pay calculation engine.
//!
//! Two text inputs feed a run: the worked-hours file (one line per
//! employee) and the rate-table file (one rate band per line). Both share
//! the two-letter day codes and the `HH:MM-HH:MM` clock-range syntax
//! handled here.

mod rates_file;
mod worked_hours;

pub use rates_file::{FileRateProvider, RateProvider, parse_rates};
pub use worked_hours::{
    FileInputReader, InputProcessor, format_period, format_week_line, parse_worked_weeks,
};

use chrono::{NaiveTime, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::TimeInterval;

/// Parses a two-letter day code (MO, TU, WE, TH, FR, SA, SU).
///
/// # Errors
///
/// Returns [`EngineError::InvalidDayCode`] for any other token.
///
/// # Examples
///
/// ```
/// use payday::input::parse_day_code;
/// use chrono::Weekday;
///
/// assert_eq!(parse_day_code("MO").unwrap(), Weekday::Mon);
/// assert!(parse_day_code("XX").is_err());
/// ```
pub fn parse_day_code(code: &str) -> EngineResult<Weekday> {
    match code {
        "MO" => Ok(Weekday::Mon),
        "TU" => Ok(Weekday::Tue),
        "WE" => Ok(Weekday::Wed),
        "TH" => Ok(Weekday::Thu),
        "FR" => Ok(Weekday::Fri),
        "SA" => Ok(Weekday::Sat),
        "SU" => Ok(Weekday::Sun),
        other => Err(EngineError::InvalidDayCode {
            code: other.to_string(),
        }),
    }
}

/// The two-letter code for a day, as written in the input files.
pub fn day_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

/// Parses an `HH:MM-HH:MM` clock range into an interval, applying the
/// midnight convention to the end time. Returns `None` when the text does
/// not split into four in-range integers; callers attach their own error.
pub(crate) fn parse_clock_range(text: &str) -> Option<TimeInterval> {
    let mut fields = text.split([':', '-']);
    let mut next_field = || fields.next()?.trim().parse::<u32>().ok();

    let start_h = next_field()?;
    let start_m = next_field()?;
    let end_h = next_field()?;
    let end_m = next_field()?;

    let start = NaiveTime::from_hms_opt(start_h, start_m, 0)?;
    let end = NaiveTime::from_hms_opt(end_h, end_m, 0)?;
    Some(TimeInterval::from_clock(start, end))
}
