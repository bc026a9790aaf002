//! Binary operations the keypad can select
//!
//! Type-safe operation enum: the controller can only ever hold one of these
//! six or nothing at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Floating-point remainder (%)
    Modulo,
    /// Exponentiation (^)
    Power,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// Returns the operator symbol used on the display and in history
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }

    /// Parses an operator symbol, accepting keyboard aliases
    /// (`*` for ×, `/` for ÷, `−` for -)
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Single-character form of [`Operation::from_symbol`]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Applies the operation to `(previous, current)`.
    ///
    /// Division by an exact zero is the only failure. Every other non-finite
    /// outcome (`x % 0` is NaN, `10 ^ 1000` is infinite) is returned as-is.
    pub fn apply(self, previous: f64, current: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => previous + current,
            Self::Subtract => previous - current,
            Self::Multiply => previous * current,
            Self::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                previous / current
            }
            Self::Modulo => previous % current,
            Self::Power => previous.powf(current),
        };
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Symbol tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
        assert_eq!(Operation::Modulo.symbol(), "%");
        assert_eq!(Operation::Power.symbol(), "^");
    }

    #[test]
    fn test_operation_display_matches_symbol() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_from_symbol_round_trips_display_symbols() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_keyboard_aliases() {
        assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("−"), Some(Operation::Subtract));
    }

    #[test]
    fn test_from_symbol_rejects_unknown() {
        assert_eq!(Operation::from_symbol(""), None);
        assert_eq!(Operation::from_symbol("x"), None);
        assert_eq!(Operation::from_symbol("++"), None);
        assert_eq!(Operation::from_symbol("="), None);
    }

    #[test]
    fn test_operation_serde_name() {
        let json = serde_json::to_string(&Operation::Power).unwrap();
        assert_eq!(json, "\"power\"");
    }

    // --- apply ---

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
    }

    #[test]
    fn test_apply_subtract_to_negative() {
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0), Ok(-6.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_divide_by_negative_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_modulo() {
        assert_eq!(Operation::Modulo.apply(7.0, 3.0), Ok(1.0));
    }

    #[test]
    fn test_apply_modulo_sign_follows_dividend() {
        assert_eq!(Operation::Modulo.apply(-7.0, 3.0), Ok(-1.0));
        assert_eq!(Operation::Modulo.apply(7.0, -3.0), Ok(1.0));
    }

    #[test]
    fn test_apply_modulo_by_zero_is_nan() {
        let result = Operation::Modulo.apply(5.0, 0.0).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_apply_power() {
        assert_eq!(Operation::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operation::Power.apply(2.0, -1.0), Ok(0.5));
    }

    #[test]
    fn test_apply_power_overflow_is_infinite() {
        let result = Operation::Power.apply(10.0, 1000.0).unwrap();
        assert!(result.is_infinite());
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_never_panics(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let result = Operation::Divide.apply(a, b);
            prop_assert_eq!(result.is_err(), b == 0.0);
        }

        #[test]
        fn prop_power_zero_exponent(a in -1e5f64..1e5f64) {
            prop_assert_eq!(Operation::Power.apply(a, 0.0), Ok(1.0));
        }
    }
}
