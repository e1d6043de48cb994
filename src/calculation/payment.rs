//! Weekly payment accumulation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, RateTable, WorkedWeek};

use super::intersection::intersect;

/// Computes the total weekly payment for one employee's worked week.
///
/// For each worked interval, every rate interval configured for that day
/// contributes `overlap × rate` to the total; overlapping rate bands all
/// count. The total is assigned to the employee's `payment` field,
/// replacing any previous value, and the updated employee is returned.
///
/// All arithmetic is exact [`Decimal`] math; no binary floating point is
/// involved at any step.
///
/// # Errors
///
/// Returns [`NoRatesForDay`](crate::error::EngineError::NoRatesForDay) if
/// any worked interval falls on a day with no configured rates. Gaps
/// *within* a configured day are not an error: hours outside every rate
/// band simply earn nothing.
///
/// # Examples
///
/// ```
/// use payday::calculation::compute_payment;
/// use payday::models::{
///     Employee, RateInterval, RateTable, TimeInterval, WorkedInterval, WorkedWeek,
/// };
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
///
/// let mut week = WorkedWeek::new(Employee::new("ESTEBAN"));
/// week.add_work(WorkedInterval {
///     day: Weekday::Mon,
///     hours: TimeInterval::from_clock(t(0, 0), t(2, 0)),
/// });
///
/// let employee = compute_payment(&table, &mut week).unwrap();
/// assert_eq!(employee.payment, Decimal::new(50, 0));
/// ```
pub fn compute_payment(table: &RateTable, week: &mut WorkedWeek) -> EngineResult<Employee> {
    let mut total = Decimal::ZERO;

    for worked in &week.work {
        let rates = table.rates_for(worked.day)?;
        for rate in rates {
            let hours = intersect(&worked.hours, &rate.hours);
            if hours > Decimal::ZERO {
                debug!(
                    employee = %week.employee.name,
                    day = %worked.day,
                    %hours,
                    rate = %rate.rate,
                    "rate band matched"
                );
            }
            total += hours * rate.rate;
        }
    }

    // Assignment, not accumulation: recomputing a week replaces the
    // previous payment.
    week.employee.payment = total;
    Ok(week.employee.clone())
}
