//! Domain models for CallBill
//!
//! This module contains all the core domain models used throughout the application.

pub mod call;
pub mod statistics;
pub mod tariff;

pub use call::{CallRecord, CallTimes, CallType, NewCall, ValidCall};
pub use statistics::{CalleeCallCount, CallerCallCount, DailyStatistics};
pub use tariff::Tariff;
