//! In-memory call store
//!
//! Keeps priced call records in a map keyed by their assigned identifier.
//! Identifiers start at 1 and are never reused, even after deletion.

use async_trait::async_trait;
use callbill_core::{
    models::{CallRecord, CallType},
    traits::{CallStore, Pagination},
    AppError, AppResult,
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, CallRecord>,
}

/// In-memory implementation of CallStore
#[derive(Debug, Default)]
pub struct InMemoryCallStore {
    inner: RwLock<Inner>,
}

impl InMemoryCallStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CallStore for InMemoryCallStore {
    #[instrument(skip(self, records), fields(batch = records.len()))]
    async fn save_all(&self, records: Vec<CallRecord>) -> AppResult<Vec<CallRecord>> {
        if let Some(existing) = records.iter().find_map(|r| r.id) {
            return Err(AppError::Store(format!(
                "Record already has id {}",
                existing
            )));
        }

        let mut inner = self.inner.write();
        let mut saved = Vec::with_capacity(records.len());

        for record in records {
            inner.next_id += 1;
            let id = inner.next_id;
            let record = record.with_id(id);
            inner.records.insert(id, record.clone());
            saved.push(record);
        }

        debug!("Stored {} call records", saved.len());
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> AppResult<Vec<CallRecord>> {
        Ok(self.inner.read().records.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        pagination: &Pagination,
        call_type: Option<CallType>,
    ) -> AppResult<(Vec<CallRecord>, i64)> {
        debug!(
            "Finding calls page {} ({} per page), type {:?}",
            pagination.page, pagination.per_page, call_type
        );

        let inner = self.inner.read();
        let matching: Vec<&CallRecord> = inner
            .records
            .values()
            .filter(|r| call_type.map_or(true, |t| r.call_type == t))
            .collect();

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((page, total))
    }

    #[instrument(skip(self))]
    async fn find_by_start_date(&self, day: NaiveDate) -> AppResult<Vec<CallRecord>> {
        Ok(self
            .inner
            .read()
            .records
            .values()
            .filter(|r| r.start_date == day)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let removed = self.inner.write().records.remove(&id).is_some();
        debug!("Delete call {}: removed={}", id, removed);
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> AppResult<i64> {
        Ok(self.inner.read().records.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callbill_core::models::{CallTimes, ValidCall};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn record(caller: i64, call_type: CallType, day: u32) -> CallRecord {
        let call = ValidCall {
            caller_number: caller,
            callee_number: 555,
            call_start_timestamp: 1_600_000_000,
            call_end_timestamp: 1_600_000_060,
            call_type,
        };
        let date = NaiveDate::from_ymd_opt(2020, 9, day).unwrap();
        let times = CallTimes {
            start_date: date,
            end_date: date,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 1, 0).unwrap(),
            duration: 60,
        };
        CallRecord::priced(&call, &times, Decimal::ZERO)
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryCallStore::new();
        let saved = store
            .save_all(vec![
                record(1, CallType::Inbound, 12),
                record(2, CallType::Outbound, 12),
            ])
            .await
            .unwrap();

        assert_eq!(saved[0].id, Some(1));
        assert_eq!(saved[1].id, Some(2));
        assert_eq!(store.count().await.unwrap(), 2);

        let more = store
            .save_all(vec![record(3, CallType::Inbound, 13)])
            .await
            .unwrap();
        assert_eq!(more[0].id, Some(3));
    }

    #[tokio::test]
    async fn test_save_rejects_already_stored_records() {
        let store = InMemoryCallStore::new();
        let stored = record(1, CallType::Inbound, 12).with_id(9);

        let result = store
            .save_all(vec![record(2, CallType::Inbound, 12), stored])
            .await;
        assert!(matches!(result, Err(AppError::Store(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_page_filters_by_type() {
        let store = InMemoryCallStore::new();
        let records = (0..25)
            .map(|i| {
                let call_type = if i % 2 == 0 {
                    CallType::Outbound
                } else {
                    CallType::Inbound
                };
                record(i + 1, call_type, 12)
            })
            .collect();
        store.save_all(records).await.unwrap();

        let (page, total) = store.find_page(&Pagination::new(3, 10), None).await.unwrap();
        assert_eq!(total, 25);
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, Some(21));

        let (page, total) = store
            .find_page(&Pagination::new(1, 10), Some(CallType::Outbound))
            .await
            .unwrap();
        assert_eq!(total, 13);
        assert_eq!(page.len(), 10);
        assert!(page.iter().all(|r| r.call_type == CallType::Outbound));

        let (page, _) = store.find_page(&Pagination::new(9, 10), None).await.unwrap();
        assert!(page.is_empty());

        let (page, total) = store
            .find_page(&Pagination::new(i64::MAX, 1000), None)
            .await
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_find_by_start_date_and_delete() {
        let store = InMemoryCallStore::new();
        store
            .save_all(vec![
                record(1, CallType::Inbound, 12),
                record(2, CallType::Outbound, 13),
                record(3, CallType::Outbound, 13),
            ])
            .await
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2020, 9, 13).unwrap();
        assert_eq!(store.find_by_start_date(day).await.unwrap().len(), 2);

        assert!(store.delete_by_id(2).await.unwrap());
        assert!(!store.delete_by_id(2).await.unwrap());
        assert_eq!(store.find_by_start_date(day).await.unwrap().len(), 1);

        let ids: Vec<_> = store.find_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }
}
