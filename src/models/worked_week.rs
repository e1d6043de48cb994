//! Worked-week model.

use serde::{Deserialize, Serialize};

use super::{Employee, WorkedInterval};

/// One employee's worked intervals for the week.
///
/// The interval sequence is append-only during construction and its order
/// is preserved, so a parsed week re-serializes to the original line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkedWeek {
    /// The employee the week belongs to.
    pub employee: Employee,
    /// The worked intervals, in input order.
    pub work: Vec<WorkedInterval>,
}

impl WorkedWeek {
    /// Creates a week for the given employee with no work recorded yet.
    pub fn new(employee: Employee) -> Self {
        WorkedWeek {
            employee,
            work: Vec::new(),
        }
    }

    /// Appends a worked interval to the week.
    pub fn add_work(&mut self, interval: WorkedInterval) {
        self.work.push(interval);
    }
}
