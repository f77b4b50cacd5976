//! Daily statistics model
//!
//! A projection of call records for a single start date. Never persisted,
//! rebuilt on every request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of calls originated by one caller on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerCallCount {
    pub caller_number: i64,
    pub total_number_of_calls: i64,
}

/// Number of calls received by one callee on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalleeCallCount {
    pub callee_number: i64,
    pub total_number_of_calls: i64,
}

/// Aggregated statistics for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatistics {
    /// Start date shared by every call in this summary
    pub day: NaiveDate,

    /// Sum of inbound call durations in seconds
    pub total_calls_duration_inbound: i64,

    /// Sum of outbound call durations in seconds
    pub total_calls_duration_outbound: i64,

    pub total_number_of_calls: i64,

    /// One counter per distinct caller, ascending by number
    pub total_number_of_calls_by_caller_number: Vec<CallerCallCount>,

    /// One counter per distinct callee, ascending by number
    pub total_number_of_calls_by_callee_number: Vec<CalleeCallCount>,

    pub total_calls_cost: Decimal,
}

impl DailyStatistics {
    /// Calls originated by `caller_number` on this day
    pub fn calls_from(&self, caller_number: i64) -> i64 {
        self.total_number_of_calls_by_caller_number
            .iter()
            .find(|c| c.caller_number == caller_number)
            .map_or(0, |c| c.total_number_of_calls)
    }

    /// Calls received by `callee_number` on this day
    pub fn calls_to(&self, callee_number: i64) -> i64 {
        self.total_number_of_calls_by_callee_number
            .iter()
            .find(|c| c.callee_number == callee_number)
            .map_or(0, |c| c.total_number_of_calls)
    }
}
