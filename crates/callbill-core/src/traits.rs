//! Common traits for call storage
//!
//! Defines the abstraction the services use to persist priced calls
//! and read them back for listings and statistics.

use crate::error::AppError;
use crate::models::{CallRecord, CallType};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// Storage for priced call records
///
/// Implementations assign identifiers on save and return records in
/// identifier order.
#[async_trait]
pub trait CallStore: Send + Sync {
    /// Store a batch of priced records, returning them with their ids
    async fn save_all(&self, records: Vec<CallRecord>) -> Result<Vec<CallRecord>, AppError>;

    /// All stored records
    async fn find_all(&self) -> Result<Vec<CallRecord>, AppError>;

    /// One page of records, optionally restricted to a call type,
    /// together with the total number of matching records
    async fn find_page(
        &self,
        pagination: &Pagination,
        call_type: Option<CallType>,
    ) -> Result<(Vec<CallRecord>, i64), AppError>;

    /// Records whose start date is `day`
    async fn find_by_start_date(&self, day: NaiveDate) -> Result<Vec<CallRecord>, AppError>;

    /// Delete a record by id, `false` when no record had that id
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Count stored records
    async fn count(&self) -> Result<i64, AppError>;
}

/// Pagination parameters
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, 1000),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(total, pagination.page, pagination.per_page),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
