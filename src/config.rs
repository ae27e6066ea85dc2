use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// validation envelope consumed by the application form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskLimits {
    pub amount_min: Money,
    pub amount_max: Money,
    pub term_min_months: u32,
    pub term_max_months: u32,
    pub rate_min: Rate,
    pub rate_max: Rate,
    pub client_name_min_len: usize,
    pub description_max_len: usize,
}

impl DeskLimits {
    /// production limits of the credit desk
    pub fn standard() -> Self {
        Self {
            amount_min: Money::from_major(50_000),
            amount_max: Money::from_major(5_000_000),
            term_min_months: 6,
            term_max_months: 360,
            rate_min: Rate::from_percent(dec!(1)),
            rate_max: Rate::from_percent(dec!(50)),
            client_name_min_len: 3,
            description_max_len: 500,
        }
    }
}

impl Default for DeskLimits {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_limits() {
        let limits = DeskLimits::default();
        assert_eq!(limits.amount_min, Money::from_major(50_000));
        assert_eq!(limits.amount_max, Money::from_major(5_000_000));
        assert_eq!(limits.term_min_months, 6);
        assert_eq!(limits.term_max_months, 360);
        assert!(limits.rate_min < limits.rate_max);
    }
}
