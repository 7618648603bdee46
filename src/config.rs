use crate::error::{Result, SplitError};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Numeric policy for settlement planning and reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementConfig {
    /// Balances whose magnitude is at or below this are considered settled.
    pub tolerance: Decimal,
    /// Decimal places emitted amounts are rounded to.
    pub scale: u32,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(0.01),
            scale: 2,
        }
    }
}

impl SettlementConfig {
    pub fn new(tolerance: Decimal, scale: u32) -> Result<Self> {
        if tolerance.is_sign_negative() {
            return Err(SplitError::ConfigError(format!(
                "tolerance must not be negative, got {tolerance}"
            )));
        }
        Ok(Self { tolerance, scale })
    }

    /// Rounds an output amount to `scale` places, halves away from zero.
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Renders an amount with exactly `scale` decimals.
    pub fn format(&self, value: Decimal) -> String {
        let rounded = self.round(value);
        // no "-0.00"
        let rounded = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        };
        format!("{:.*}", self.scale as usize, rounded)
    }
}

/// Limits applied to receipt images and recognition results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannerConfig {
    pub max_image_bytes: usize,
    /// Recognitions below this confidence (0-100) are rejected.
    pub min_confidence: f32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 10 * 1024 * 1024,
            min_confidence: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        let config = SettlementConfig::default();
        assert_eq!(config.round(dec!(2.345)), dec!(2.35));
        assert_eq!(config.round(dec!(2.344)), dec!(2.34));
        assert_eq!(config.round(dec!(-2.345)), dec!(-2.35));
    }

    #[test]
    fn test_format_pads_to_scale() {
        let config = SettlementConfig::default();
        assert_eq!(config.format(dec!(30)), "30.00");
        assert_eq!(config.format(dec!(3.333333)), "3.33");
        assert_eq!(config.format(dec!(-0.5)), "-0.50");
        assert_eq!(config.format(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        assert!(matches!(
            SettlementConfig::new(dec!(-0.01), 2),
            Err(SplitError::ConfigError(_))
        ));
        assert!(SettlementConfig::new(Decimal::ZERO, 4).is_ok());
    }
}
