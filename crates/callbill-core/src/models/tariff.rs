//! Tariff model
//!
//! Tiered per-minute pricing for outbound calls: one rate up to the
//! threshold, a lower rate for every minute after it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tiered outbound tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Rate per minute for the first `threshold_minutes` minutes
    pub rate_first_minutes: Decimal,

    /// Rate per minute after the threshold
    pub rate_after_threshold: Decimal,

    /// Minutes billed at the first rate
    pub threshold_minutes: u32,
}

impl Tariff {
    pub fn new(rate_first_minutes: Decimal, rate_after_threshold: Decimal, threshold_minutes: u32) -> Self {
        Self {
            rate_first_minutes,
            rate_after_threshold,
            threshold_minutes,
        }
    }

    /// Unrounded price of `minutes` whole billed minutes
    pub fn price_minutes(&self, minutes: i64) -> Decimal {
        let threshold = i64::from(self.threshold_minutes);

        if minutes > threshold {
            Decimal::from(threshold) * self.rate_first_minutes
                + Decimal::from(minutes - threshold) * self.rate_after_threshold
        } else {
            Decimal::from(minutes) * self.rate_first_minutes
        }
    }
}

/// 0.10 per minute for the first 5 minutes, 0.05 afterwards
impl Default for Tariff {
    fn default() -> Self {
        Self {
            rate_first_minutes: Decimal::new(10, 2),
            rate_after_threshold: Decimal::new(5, 2),
            threshold_minutes: 5,
        }
    }
}
