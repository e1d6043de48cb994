//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee and the amount owed to them for the week.
///
/// `payment` starts at zero and is assigned (not accumulated) by the
/// payment calculator; running the calculator again for the same week
/// overwrites the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name, as it appears in the worked-hours file.
    pub name: String,
    /// The computed weekly payment. Zero until the week is calculated.
    pub payment: Decimal,
}

impl Employee {
    /// Creates an employee with a zero payment.
    ///
    /// # Examples
    ///
    /// ```
    /// use payday::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("RENE");
    /// assert_eq!(employee.name, "RENE");
    /// assert_eq!(employee.payment, Decimal::ZERO);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Employee {
            name: name.into(),
            payment: Decimal::ZERO,
        }
    }
}
