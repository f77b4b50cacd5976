//! Call models
//!
//! A call moves through three shapes: the raw `NewCall` as received,
//! the `ValidCall` accepted by the validator, and the priced `CallRecord`
//! handed to the store.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Direction of a call relative to the billed party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CallType {
    Inbound,
    Outbound,
}

impl CallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::Inbound => "Inbound",
            CallType::Outbound => "Outbound",
        }
    }

    /// Only outbound calls are billed
    #[inline]
    pub fn is_billable(&self) -> bool {
        matches!(self, CallType::Outbound)
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: only `Inbound` and `Outbound` are accepted
impl FromStr for CallType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Inbound" => Ok(CallType::Inbound),
            "Outbound" => Ok(CallType::Outbound),
            other => Err(ValidationError::InvalidCallType(Some(other.to_string()))),
        }
    }
}

/// Raw call input as submitted by a client
///
/// Every field is optional; the validator decides what is acceptable.
/// A client-supplied `id` is ignored, the store assigns identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub caller_number: Option<i64>,
    pub callee_number: Option<i64>,
    pub call_start_timestamp: Option<i64>,
    pub call_end_timestamp: Option<i64>,
    pub call_type: Option<String>,
}

impl NewCall {
    pub fn new(
        caller_number: i64,
        callee_number: i64,
        call_start_timestamp: i64,
        call_end_timestamp: i64,
        call_type: &str,
    ) -> Self {
        Self {
            id: None,
            caller_number: Some(caller_number),
            callee_number: Some(callee_number),
            call_start_timestamp: Some(call_start_timestamp),
            call_end_timestamp: Some(call_end_timestamp),
            call_type: Some(call_type.to_string()),
        }
    }
}

/// A call that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidCall {
    pub caller_number: i64,
    pub callee_number: i64,
    pub call_start_timestamp: i64,
    pub call_end_timestamp: i64,
    pub call_type: CallType,
}

/// Calendar fields derived from a call's timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTimes {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    /// Elapsed seconds between start and end
    pub duration: i64,
}

/// Priced call record
///
/// Derived fields are computed once when the record is priced and never
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    /// Store-assigned identifier (None until persisted)
    pub id: Option<i64>,

    pub caller_number: i64,
    pub callee_number: i64,

    /// Epoch seconds
    pub call_start_timestamp: i64,
    pub call_end_timestamp: i64,

    pub call_type: CallType,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    /// Duration in seconds
    pub duration: i64,

    /// Cost of the call, always zero for inbound calls
    pub cost: Decimal,
}

impl CallRecord {
    /// Assemble an unsaved record from its validated input, times and cost
    pub fn priced(call: &ValidCall, times: &CallTimes, cost: Decimal) -> Self {
        Self {
            id: None,
            caller_number: call.caller_number,
            callee_number: call.callee_number,
            call_start_timestamp: call.call_start_timestamp,
            call_end_timestamp: call.call_end_timestamp,
            call_type: call.call_type,
            start_date: times.start_date,
            end_date: times.end_date,
            start_time: times.start_time,
            end_time: times.end_time,
            duration: times.duration,
            cost,
        }
    }

    /// Same record with its store identifier
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

}
