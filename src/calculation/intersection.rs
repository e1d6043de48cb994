//! Time-interval intersection.
//!
//! This module provides the overlap computation at the heart of the
//! engine: how many hours of one clock interval fall inside another,
//! with both intervals independently allowed to end at 24:00 via the
//! midnight convention (see [`IntervalEnd`]).

use rust_decimal::Decimal;

use crate::models::{IntervalEnd, TimeInterval, minutes_from_midnight};

/// Computes the overlap of two clock intervals, in hours.
///
/// Both intervals belong to the same calendar day. Each interval's end is
/// either an ordinary clock time or [`IntervalEnd::EndOfDay`], which
/// resolves to 24:00 of that same day.
///
/// The algorithm:
/// 1. Disjointness is decided against raw clock ends only: an interval
///    ending at `EndOfDay` can never be "before" the other's start.
/// 2. The intersection runs from the later start to the earlier effective
///    end, where `EndOfDay` resolves to 1440 minutes. When both ends are
///    `EndOfDay` the intersection ends at 24:00 of the shared day, not a
///    day later.
/// 3. The result is clamped at zero, so it never goes negative and never
///    wraps.
///
/// # Returns
///
/// The overlap as a [`Decimal`] number of hours in `[0, 24]`. Disjoint
/// intervals yield exactly zero. The operation is symmetric:
/// `intersect(a, b) == intersect(b, a)`.
///
/// # Examples
///
/// ```
/// use payday::calculation::intersect;
/// use payday::models::TimeInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let span = |s: (u32, u32), e: (u32, u32)| {
///     TimeInterval::from_clock(t(s.0, s.1), t(e.0, e.1))
/// };
///
/// // Plain overlap.
/// assert_eq!(
///     intersect(&span((0, 0), (3, 0)), &span((2, 0), (5, 0))),
///     Decimal::new(1, 0)
/// );
///
/// // Both intervals run to midnight: 24:00 - max(20:00, 18:00) = 4 hours.
/// assert_eq!(
///     intersect(&span((20, 0), (0, 0)), &span((18, 0), (0, 0))),
///     Decimal::new(4, 0)
/// );
/// ```
pub fn intersect(a: &TimeInterval, b: &TimeInterval) -> Decimal {
    // Raw-end disjointness checks. An EndOfDay end skips its check: an
    // interval running to 24:00 reaches past every start time.
    if let IntervalEnd::ClockTime(b_end) = b.end {
        if a.start > b_end {
            return Decimal::ZERO;
        }
    }
    if let IntervalEnd::ClockTime(a_end) = a.end {
        if b.start > a_end {
            return Decimal::ZERO;
        }
    }

    let start = minutes_from_midnight(a.start).max(minutes_from_midnight(b.start));
    let end = a.end.minutes().min(b.end.minutes());
    let overlap_minutes = (end - start).max(0);

    Decimal::new(overlap_minutes, 0) / Decimal::new(60, 0)
}
