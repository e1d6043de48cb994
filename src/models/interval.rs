//! Clock-interval model and the midnight convention.
//!
//! This module defines [`TimeInterval`], the primitive the whole engine is
//! built on: a span of clock time within a single calendar day. The input
//! format writes "until midnight" as an end time of `00:00`; that raw
//! value is promoted to the explicit [`IntervalEnd::EndOfDay`] state at
//! construction time so no downstream code ever has to compare against a
//! sentinel midnight.

use chrono::{NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in a full day, the resolved position of an [`IntervalEnd::EndOfDay`].
pub const END_OF_DAY_MINUTES: i64 = 24 * 60;

/// The end of a [`TimeInterval`], tagged explicitly.
///
/// An interval either ends at an ordinary clock time on the same day, or
/// extends to the end of that day (24:00). The input format expresses the
/// latter as a raw end time of `00:00`; modelling it as its own variant
/// keeps "midnight meaning 24:00" from ever being confused with
/// "midnight meaning 00:00".
///
/// # Example
///
/// ```
/// use payday::models::IntervalEnd;
/// use chrono::NaiveTime;
///
/// let end = IntervalEnd::from_clock(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
/// assert_eq!(end, IntervalEnd::EndOfDay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalEnd {
    /// The interval ends at this clock time on the same day.
    ClockTime(NaiveTime),
    /// The interval extends to the end of the day (24:00).
    EndOfDay,
}

impl IntervalEnd {
    /// Interprets a raw clock time as an interval end, mapping `00:00` to
    /// [`IntervalEnd::EndOfDay`].
    pub fn from_clock(end: NaiveTime) -> Self {
        if end == NaiveTime::MIN {
            IntervalEnd::EndOfDay
        } else {
            IntervalEnd::ClockTime(end)
        }
    }

    /// The resolved position of this end, in minutes from the start of
    /// the day. `EndOfDay` resolves to 1440.
    pub fn minutes(&self) -> i64 {
        match self {
            IntervalEnd::ClockTime(t) => minutes_from_midnight(*t),
            IntervalEnd::EndOfDay => END_OF_DAY_MINUTES,
        }
    }

    /// The raw clock rendering of this end, with `EndOfDay` written back
    /// as `00:00`. Used when serializing to the line format.
    pub fn as_clock(&self) -> NaiveTime {
        match self {
            IntervalEnd::ClockTime(t) => *t,
            IntervalEnd::EndOfDay => NaiveTime::MIN,
        }
    }
}

/// Minutes elapsed from the start of the day to the given clock time.
pub fn minutes_from_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// A span of clock time within one calendar day.
///
/// The start is always an ordinary clock time; the end carries the
/// midnight convention via [`IntervalEnd`]. Intervals never span days:
/// cross-midnight work must arrive as two intervals, one per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// The start of the interval.
    pub start: NaiveTime,
    /// The end of the interval, with `EndOfDay` meaning 24:00.
    pub end: IntervalEnd,
}

impl TimeInterval {
    /// Builds an interval from two raw clock times, applying the midnight
    /// convention to the end.
    ///
    /// # Example
    ///
    /// ```
    /// use payday::models::{IntervalEnd, TimeInterval};
    /// use chrono::NaiveTime;
    ///
    /// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    ///
    /// // "20:00 to midnight" ends at 24:00, not at 00:00 of the same day.
    /// let evening = TimeInterval::from_clock(t(20, 0), t(0, 0));
    /// assert_eq!(evening.end, IntervalEnd::EndOfDay);
    ///
    /// let morning = TimeInterval::from_clock(t(9, 0), t(12, 30));
    /// assert_eq!(morning.end, IntervalEnd::ClockTime(t(12, 30)));
    /// ```
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Self {
        TimeInterval {
            start,
            end: IntervalEnd::from_clock(end),
        }
    }
}

/// A period of time worked by an employee on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedInterval {
    /// The day of the week the work happened.
    pub day: Weekday,
    /// The clock span worked on that day.
    pub hours: TimeInterval,
}

/// An hourly pay rate that applies during a clock span on one day of the
/// week.
///
/// A day may carry any number of rate intervals, including overlapping or
/// adjacent ones; each contributes its own `overlap × rate` to a worked
/// interval's pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateInterval {
    /// The day of the week the rate applies.
    pub day: Weekday,
    /// The clock span the rate applies during.
    pub hours: TimeInterval,
    /// The hourly rate, in currency units per hour.
    pub rate: Decimal,
}
