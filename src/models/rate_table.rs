//! The per-day rate table.

use std::collections::HashMap;

use chrono::Weekday;

use crate::error::{EngineError, EngineResult};

use super::RateInterval;

/// A mapping from day of the week to its configured rate intervals.
///
/// Intervals are kept in insertion order per day, and entries are never
/// removed during a run. The table is fully populated before any payment
/// is computed; afterwards it is only read.
///
/// # Example
///
/// ```
/// use payday::models::{RateInterval, RateTable, TimeInterval};
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let mut table = RateTable::new();
/// table.add_period(RateInterval {
///     day: Weekday::Mon,
///     hours: TimeInterval::from_clock(t(0, 0), t(9, 0)),
///     rate: Decimal::new(25, 0),
/// });
/// assert_eq!(table.rates_for(Weekday::Mon).unwrap().len(), 1);
/// assert!(table.rates_for(Weekday::Tue).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<Weekday, Vec<RateInterval>>,
}

impl RateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        RateTable {
            rates: HashMap::new(),
        }
    }

    /// Appends a rate interval to its day's sequence, creating the
    /// sequence if the day has not been seen before.
    pub fn add_period(&mut self, rate: RateInterval) {
        self.rates.entry(rate.day).or_default().push(rate);
    }

    /// Adds all the given rate intervals, preserving their order.
    pub fn set_rates(&mut self, rates: impl IntoIterator<Item = RateInterval>) {
        for rate in rates {
            self.add_period(rate);
        }
    }

    /// The rate intervals configured for a day, in insertion order.
    ///
    /// A day that was never configured is a fatal configuration error,
    /// not an empty sequence: paying zero for it would silently swallow
    /// worked hours.
    pub fn rates_for(&self, day: Weekday) -> EngineResult<&[RateInterval]> {
        self.rates
            .get(&day)
            .map(Vec::as_slice)
            .ok_or(EngineError::NoRatesForDay { day })
    }

    /// True if no day has any rates configured.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn rate(day: Weekday, start: (u32, u32), end: (u32, u32), rate: &str) -> RateInterval {
        RateInterval {
            day,
            hours: TimeInterval::from_clock(t(start.0, start.1), t(end.0, end.1)),
            rate: Decimal::from_str(rate).unwrap(),
        }
    }

    #[test]
    fn test_add_period_groups_by_day() {
        let mut table = RateTable::new();
        table.add_period(rate(Weekday::Mon, (0, 0), (9, 0), "25"));
        table.add_period(rate(Weekday::Tue, (0, 0), (9, 0), "5.5"));
        table.add_period(rate(Weekday::Mon, (9, 0), (0, 0), "30"));

        assert_eq!(table.rates_for(Weekday::Mon).unwrap().len(), 2);
        assert_eq!(table.rates_for(Weekday::Tue).unwrap().len(), 1);
    }

    #[test]
    fn test_rates_preserve_insertion_order() {
        let mut table = RateTable::new();
        table.set_rates(vec![
            rate(Weekday::Tue, (0, 0), (9, 0), "5.5"),
            rate(Weekday::Tue, (9, 0), (18, 0), "10.2"),
            rate(Weekday::Tue, (18, 0), (0, 0), "20.8"),
        ]);

        let rates = table.rates_for(Weekday::Tue).unwrap();
        let amounts: Vec<String> = rates.iter().map(|r| r.rate.to_string()).collect();
        assert_eq!(amounts, vec!["5.5", "10.2", "20.8"]);
    }

    #[test]
    fn test_unconfigured_day_is_an_error() {
        let mut table = RateTable::new();
        table.add_period(rate(Weekday::Mon, (0, 0), (9, 0), "25"));

        match table.rates_for(Weekday::Sun) {
            Err(EngineError::NoRatesForDay { day }) => assert_eq!(day, Weekday::Sun),
            other => panic!("Expected NoRatesForDay, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::new();
        assert!(table.is_empty());
        assert!(table.rates_for(Weekday::Mon).is_err());
    }
}
