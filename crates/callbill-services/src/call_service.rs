//! Call service
//!
//! Connects the pricing pipeline and the statistics aggregator to a
//! `CallStore`: ingest batches, list, delete and summarise calls.

use callbill_core::{
    config::{AppConfig, StoreConfig},
    models::{CallRecord, CallType, DailyStatistics, NewCall},
    traits::{CallStore, PaginatedResponse, Pagination},
    AppError, AppResult,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::pricing::CallPricer;
use crate::statistics::StatisticsAggregator;

/// Call ingest, listing and statistics over a store
pub struct CallService<S: CallStore> {
    store: Arc<S>,
    pricer: CallPricer,
    page_size: i64,
}

impl<S: CallStore> CallService<S> {
    /// Create a service with the default tariff, UTC and default page size
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            pricer: CallPricer::default(),
            page_size: i64::from(StoreConfig::default().page_size),
        }
    }

    /// Create a service configured from `config`
    pub fn from_config(store: Arc<S>, config: &AppConfig) -> AppResult<Self> {
        let tz = config.time.tz()?;
        let pricer = CallPricer::new(tz, config.billing.tariff());

        Ok(Self::new(store)
            .with_pricer(pricer)
            .with_page_size(i64::from(config.store.page_size)))
    }

    pub fn with_pricer(mut self, pricer: CallPricer) -> Self {
        self.pricer = pricer;
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Validate and price a batch without storing it
    pub fn price_calls(&self, calls: &[NewCall]) -> AppResult<Vec<CallRecord>> {
        self.pricer.price_batch(calls)
    }

    /// Price a batch and store it
    ///
    /// An invalid call rejects the whole batch before anything is stored.
    #[instrument(skip(self, calls), fields(batch = calls.len()))]
    pub async fn create_calls(&self, calls: Vec<NewCall>) -> AppResult<Vec<CallRecord>> {
        let records = self.price_calls(&calls)?;
        let saved = self.store.save_all(records).await?;

        info!("Created {} calls", saved.len());
        Ok(saved)
    }

    /// One page of stored calls, optionally filtered by call type
    ///
    /// `page` is 1-based. An absent or empty type lists every call.
    #[instrument(skip(self))]
    pub async fn list_calls(
        &self,
        page: i64,
        call_type: Option<&str>,
    ) -> AppResult<PaginatedResponse<CallRecord>> {
        let call_type = match call_type {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CallType>()?),
        };

        let pagination = Pagination::new(page, self.page_size);
        let (data, total) = self.store.find_page(&pagination, call_type).await?;

        debug!(
            "Listed {} of {} calls on page {}",
            data.len(),
            total,
            pagination.page
        );
        Ok(PaginatedResponse::new(data, total, &pagination))
    }

    /// Delete a stored call
    #[instrument(skip(self))]
    pub async fn delete_call(&self, id: i64) -> AppResult<()> {
        if self.store.delete_by_id(id).await? {
            info!("Deleted call {}", id);
            Ok(())
        } else {
            warn!("Delete requested for unknown call {}", id);
            Err(AppError::CallNotFound(id))
        }
    }

    /// Daily statistics over every stored call
    #[instrument(skip(self))]
    pub async fn call_statistics(&self) -> AppResult<Vec<DailyStatistics>> {
        let records = self.store.find_all().await?;
        let stats = StatisticsAggregator::aggregate(&records);

        info!(
            "Computed statistics for {} days from {} calls",
            stats.len(),
            records.len()
        );
        Ok(stats)
    }

    /// Statistics for the calls started on `day`, empty when there are none
    #[instrument(skip(self))]
    pub async fn day_statistics(&self, day: NaiveDate) -> AppResult<Option<DailyStatistics>> {
        let records = self.store.find_by_start_date(day).await?;
        Ok(StatisticsAggregator::aggregate(&records).into_iter().next())
    }
}
