//! Call validation
//!
//! Checks a raw call field by field in a fixed order and reports the
//! first rule it breaks.

use callbill_core::{
    models::{CallType, NewCall, ValidCall},
    AppError, AppResult, ValidationError,
};
use chrono::{DateTime, Utc};
use tracing::warn;

/// A positive timestamp chrono can represent as an instant
fn valid_timestamp(ts: Option<i64>) -> Option<i64> {
    ts.filter(|&t| t > 0 && DateTime::<Utc>::from_timestamp(t, 0).is_some())
}

/// Validate a single raw call
///
/// Checks run in this order: caller number, callee number, start
/// timestamp, end timestamp, start not after end, call type.
pub fn validate_call(call: &NewCall) -> Result<ValidCall, ValidationError> {
    let caller_number = call
        .caller_number
        .filter(|&n| n > 0)
        .ok_or(ValidationError::InvalidCallerNumber(call.caller_number))?;

    let callee_number = call
        .callee_number
        .filter(|&n| n > 0)
        .ok_or(ValidationError::InvalidCalleeNumber(call.callee_number))?;

    let start = valid_timestamp(call.call_start_timestamp)
        .ok_or(ValidationError::InvalidStartTimestamp(call.call_start_timestamp))?;

    let end = valid_timestamp(call.call_end_timestamp)
        .ok_or(ValidationError::InvalidEndTimestamp(call.call_end_timestamp))?;

    if start > end {
        return Err(ValidationError::StartAfterEnd { start, end });
    }

    let call_type = match call.call_type.as_deref() {
        Some(raw) => raw.parse::<CallType>()?,
        None => return Err(ValidationError::InvalidCallType(None)),
    };

    Ok(ValidCall {
        caller_number,
        callee_number,
        call_start_timestamp: start,
        call_end_timestamp: end,
        call_type,
    })
}

/// Validate every call of a batch
///
/// The whole batch is rejected by its first invalid call.
pub fn validate_batch(calls: &[NewCall]) -> AppResult<Vec<ValidCall>> {
    calls
        .iter()
        .enumerate()
        .map(|(index, call)| {
            validate_call(call).map_err(|source| {
                warn!("Rejecting batch: call {} is invalid: {}", index, source);
                AppError::InvalidCall { index, source }
            })
        })
        .collect()
}
