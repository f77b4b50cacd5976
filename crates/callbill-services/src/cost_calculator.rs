//! Call cost calculation
//!
//! Outbound calls are billed per started minute on a tiered tariff;
//! inbound calls are free.

use callbill_core::models::{CallType, Tariff};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::constants::{COST_DECIMAL_PLACES, SECONDS_PER_MINUTE};

/// Prices calls against a tariff
#[derive(Debug, Clone, Copy, Default)]
pub struct CostCalculator {
    tariff: Tariff,
}

impl CostCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Whole minutes billed for `duration` seconds
    ///
    /// Any started minute counts as a full one.
    #[inline]
    pub fn billable_minutes(duration: i64) -> i64 {
        let minutes = duration / SECONDS_PER_MINUTE;
        if duration % SECONDS_PER_MINUTE > 0 {
            minutes + 1
        } else {
            minutes
        }
    }

    /// Cost of a call of `duration` seconds
    ///
    /// Minutes are rounded up before the tier split; the result is rounded
    /// half-up to two decimal places.
    pub fn calculate(&self, duration: i64, call_type: CallType) -> Decimal {
        if !call_type.is_billable() {
            return Decimal::ZERO;
        }

        let minutes = Self::billable_minutes(duration);
        let cost = self
            .tariff
            .price_minutes(minutes)
            .round_dp_with_strategy(COST_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        debug!(
            "Calculated cost: {}s → {} min = {} (first {} min at {}/min, then {}/min)",
            duration,
            minutes,
            cost,
            self.tariff.threshold_minutes,
            self.tariff.rate_first_minutes,
            self.tariff.rate_after_threshold
        );

        cost
    }
}
