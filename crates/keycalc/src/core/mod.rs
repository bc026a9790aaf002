//! Core calculator model: operands, operations, number handling, history
//!
//! Everything in here is free of UI concerns. The controller composes these
//! pieces; frontends never touch them directly.

pub mod history;
pub mod number;
mod operand;
mod operations;

pub use operand::Operand;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Malformed input (a second decimal point, an operator with nothing typed)
/// is not an error: it is ignored without touching state. The only failure a
/// user ever sees is division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted; the controller has already reset itself
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

impl CalcError {
    /// Returns the text shown in the blocking user notification
    #[must_use]
    pub fn alert_message(&self) -> String {
        format!("Error: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Cannot divide by zero!");
    }

    #[test]
    fn test_calc_error_alert_message() {
        assert_eq!(
            CalcError::DivisionByZero.alert_message(),
            "Error: Cannot divide by zero!"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("divide"));
    }
}
