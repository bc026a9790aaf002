//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::core::number::DEFAULT_PRECISION;

/// Tunables for a [`CalculatorController`](crate::controller::CalculatorController)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places results are rounded to before display
    pub precision: u8,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorConfig {
    /// Largest precision accepted by [`CalculatorConfig::with_precision`]
    pub const MAX_PRECISION: u8 = 20;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding precision, clamped to [`Self::MAX_PRECISION`]
    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision.min(Self::MAX_PRECISION);
        self
    }
}
