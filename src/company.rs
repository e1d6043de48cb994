//! The company: an instance-owned rate table plus run orchestration.

use tracing::info;

use crate::calculation::compute_payment;
use crate::error::EngineResult;
use crate::input::InputProcessor;
use crate::models::{Employee, RateInterval, RateTable, WorkedWeek};
use crate::output::OutputFormatter;

/// A company with its own pay-rate configuration.
///
/// Each `Company` owns its [`RateTable`]; two independently constructed
/// companies never share rate data. The table is populated up front with
/// [`set_rates`](Company::set_rates) and only read during payment
/// computation.
///
/// # Example
///
/// ```
/// use payday::company::Company;
/// use payday::models::{Employee, RateInterval, TimeInterval, WorkedInterval, WorkedWeek};
/// use chrono::{NaiveTime, Weekday};
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// let mut company = Company::new("ACME");
/// company.add_period(RateInterval {
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
/// let employee = company.compute_payment(&mut week)?;
/// assert_eq!(employee.payment, Decimal::new(50, 0));
/// # Ok::<(), payday::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    rates: RateTable,
}

impl Company {
    /// Creates a company with an empty rate table.
    pub fn new(name: impl Into<String>) -> Self {
        Company {
            name: name.into(),
            rates: RateTable::new(),
        }
    }

    /// The company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds one rate interval to the company's table.
    pub fn add_period(&mut self, rate: RateInterval) {
        self.rates.add_period(rate);
    }

    /// Adds all the given rate intervals, preserving order.
    pub fn set_rates(&mut self, rates: impl IntoIterator<Item = RateInterval>) {
        self.rates.set_rates(rates);
    }

    /// The company's rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Computes one employee's weekly payment against this company's
    /// rates. See [`compute_payment`](crate::calculation::compute_payment).
    pub fn compute_payment(&self, week: &mut WorkedWeek) -> EngineResult<Employee> {
        compute_payment(&self.rates, week)
    }

    /// Computes payments for every week the input yields, in input order.
    pub fn payments(&self, input: &dyn InputProcessor) -> EngineResult<Vec<Employee>> {
        let mut weeks = input.worked_weeks()?;
        let mut payments = Vec::with_capacity(weeks.len());
        for week in &mut weeks {
            payments.push(self.compute_payment(week)?);
        }
        info!(
            company = %self.name,
            employees = payments.len(),
            "computed weekly payments"
        );
        Ok(payments)
    }

    /// Computes all payments and prints one line per employee through the
    /// formatter. Nothing is printed if any week fails to parse or
    /// compute.
    pub fn print_payments(
        &self,
        input: &dyn InputProcessor,
        output: &dyn OutputFormatter,
    ) -> EngineResult<()> {
        for employee in self.payments(input)? {
            output.print_payment(&employee);
        }
        Ok(())
    }
}
