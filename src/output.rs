//! Output rendering for computed payments.

use crate::models::Employee;

/// A sink for computed payments.
///
/// Single-method counterpart to [`InputProcessor`]: one text formatter
/// ships here, and alternative sinks (structured output, a network
/// endpoint) can be added without touching the core.
///
/// [`InputProcessor`]: crate::input::InputProcessor
pub trait OutputFormatter {
    /// Renders one employee's payment line.
    fn format_payment(&self, employee: &Employee) -> String;

    /// Prints one employee's payment line to standard output.
    fn print_payment(&self, employee: &Employee) {
        println!("{}", self.format_payment(employee));
    }
}

/// Renders payments as plain text, one line per employee.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOutputFormatter;

impl OutputFormatter for TextOutputFormatter {
    fn format_payment(&self, employee: &Employee) -> String {
        format!(
            "The amount to pay {} is {}",
            employee.name, employee.payment
        )
    }
}
