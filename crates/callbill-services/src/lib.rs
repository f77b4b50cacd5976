//! Business logic services for CallBill
//!
//! This crate contains the call pipeline: validation, calendar
//! decomposition, pricing and daily statistics, plus the `CallService`
//! facade that connects the pipeline to a `CallStore`.
//!
//! # Architecture
//!
//! - `validator`, `time_decomposer`, `cost_calculator` and `statistics`
//!   are pure and synchronous
//! - `CallPricer` chains the first three over a batch
//! - `CallService` owns a store and is async, like the store trait
//!
//! # Services
//!
//! - `CallPricer` - Batch validation and pricing
//! - `CostCalculator` - Tiered ceiling-minute billing
//! - `TimeDecomposer` - Timestamp to calendar fields in a fixed timezone
//! - `StatisticsAggregator` - Per-day call statistics
//! - `CallService` - Ingest, listing, deletion and statistics over a store

pub mod call_service;
pub mod cost_calculator;
pub mod pricing;
pub mod statistics;
pub mod time_decomposer;
pub mod validator;

pub use call_service::CallService;
pub use cost_calculator::CostCalculator;
pub use pricing::CallPricer;
pub use statistics::StatisticsAggregator;
pub use time_decomposer::TimeDecomposer;
pub use validator::{validate_batch, validate_call};

/// Business logic constants
pub mod constants {
    /// Seconds in a billed minute
    pub const SECONDS_PER_MINUTE: i64 = 60;

    /// Decimal places a call cost is rounded to
    pub const COST_DECIMAL_PLACES: u32 = 2;
}
