//! Batch pricing pipeline
//!
//! Validates a batch of raw calls, then decomposes and prices each one.
//! Nothing is priced unless the whole batch is valid.

use callbill_core::{
    models::{CallRecord, NewCall, Tariff, ValidCall},
    AppResult,
};
use chrono_tz::Tz;
use tracing::{debug, info};

use crate::cost_calculator::CostCalculator;
use crate::time_decomposer::TimeDecomposer;
use crate::validator::validate_batch;

/// Turns raw calls into priced, unsaved call records
#[derive(Debug, Clone, Copy, Default)]
pub struct CallPricer {
    decomposer: TimeDecomposer,
    calculator: CostCalculator,
}

impl CallPricer {
    pub fn new(tz: Tz, tariff: Tariff) -> Self {
        Self {
            decomposer: TimeDecomposer::new(tz),
            calculator: CostCalculator::new(tariff),
        }
    }

    /// Price one call that already passed validation
    pub fn price(&self, call: &ValidCall) -> AppResult<CallRecord> {
        let times = self
            .decomposer
            .decompose(call.call_start_timestamp, call.call_end_timestamp)?;
        let cost = self.calculator.calculate(times.duration, call.call_type);

        debug!(
            "Priced {} call {} → {}: {}s, cost {}",
            call.call_type, call.caller_number, call.callee_number, times.duration, cost
        );

        Ok(CallRecord::priced(call, &times, cost))
    }

    /// Validate the whole batch, then price every call
    pub fn price_batch(&self, calls: &[NewCall]) -> AppResult<Vec<CallRecord>> {
        let valid = validate_batch(calls)?;
        let records = valid
            .iter()
            .map(|call| self.price(call))
            .collect::<AppResult<Vec<_>>>()?;

        info!(
            "Priced batch of {} calls in {}",
            records.len(),
            self.decomposer.timezone().name()
        );
        Ok(records)
    }
}
