//! CallBill Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the CallBill system. It includes:
//!
//! - Domain models (NewCall, CallRecord, DailyStatistics, Tariff)
//! - The call store trait and pagination types
//! - Unified error handling with stable error codes
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::{AppError, ValidationError};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
