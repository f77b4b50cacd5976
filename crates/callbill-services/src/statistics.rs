//! Daily call statistics
//!
//! Groups priced call records by start date and summarises each day.
//! Days, callers and callees are all emitted in ascending order.

use callbill_core::models::{CallRecord, CallType, CalleeCallCount, CallerCallCount, DailyStatistics};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Builds per-day summaries from a full set of call records
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// One summary per distinct start date, ascending by day
    pub fn aggregate(records: &[CallRecord]) -> Vec<DailyStatistics> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&CallRecord>> = BTreeMap::new();
        for record in records {
            by_day.entry(record.start_date).or_default().push(record);
        }

        debug!(
            "Aggregating {} call records over {} days",
            records.len(),
            by_day.len()
        );

        by_day
            .into_iter()
            .map(|(day, calls)| Self::summarize_day(day, &calls))
            .collect()
    }

    fn summarize_day(day: NaiveDate, calls: &[&CallRecord]) -> DailyStatistics {
        let mut by_caller: BTreeMap<i64, i64> = BTreeMap::new();
        let mut by_callee: BTreeMap<i64, i64> = BTreeMap::new();

        for call in calls {
            *by_caller.entry(call.caller_number).or_default() += 1;
            *by_callee.entry(call.callee_number).or_default() += 1;
        }

        DailyStatistics {
            day,
            total_calls_duration_inbound: Self::total_duration(calls, CallType::Inbound),
            total_calls_duration_outbound: Self::total_duration(calls, CallType::Outbound),
            total_number_of_calls: calls.len() as i64,
            total_number_of_calls_by_caller_number: by_caller
                .into_iter()
                .map(|(caller_number, total_number_of_calls)| CallerCallCount {
                    caller_number,
                    total_number_of_calls,
                })
                .collect(),
            total_number_of_calls_by_callee_number: by_callee
                .into_iter()
                .map(|(callee_number, total_number_of_calls)| CalleeCallCount {
                    callee_number,
                    total_number_of_calls,
                })
                .collect(),
            total_calls_cost: calls.iter().map(|c| c.cost).sum::<Decimal>(),
        }
    }

    fn total_duration(calls: &[&CallRecord], call_type: CallType) -> i64 {
        calls
            .iter()
            .filter(|c| c.call_type == call_type)
            .map(|c| c.duration)
            .sum()
    }
}
