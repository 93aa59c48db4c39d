// Job Store Port (Interface)

use crate::domain::JobRecord;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use tracing::warn;

/// Outcome of a single upsert-if-absent operation.
///
/// First write wins: an existing row is never overwritten, so "Skipped" means
/// the record was already present with whatever columns it was first stored
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Skipped,
}

/// Counters for one batch of upserts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertStats {
    pub inserted: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Store interface for normalized job records.
///
/// Implementations:
/// - PgJobStore (infra-postgres): single `jobs` table keyed by job_id
/// - mocks::InMemoryJobStore: BTreeMap-backed fake for tests
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Create the jobs table if absent. Never drops or destroys existing data.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert `record` only if its job_id is not already present.
    ///
    /// # Errors
    /// - AppError::RowInsert for an empty job_id or a constraint violation
    ///   (recoverable; the batch continues)
    /// - AppError::Connection if the store is unreachable (fatal)
    async fn upsert_if_absent(&self, record: &JobRecord) -> Result<UpsertOutcome>;

    /// Apply `upsert_if_absent` to each record in sequence.
    ///
    /// A RowInsert failure on one record is logged and counted; it is not
    /// fatal to the batch. Any other error aborts the batch.
    async fn upsert_all(&self, records: &[JobRecord]) -> Result<UpsertStats> {
        let mut stats = UpsertStats::default();
        for record in records {
            match self.upsert_if_absent(record).await {
                Ok(UpsertOutcome::Inserted) => stats.inserted += 1,
                Ok(UpsertOutcome::Skipped) => stats.skipped += 1,
                Err(AppError::RowInsert { job_id, reason }) => {
                    warn!(job_id = %job_id, reason = %reason, "Skipping record: insert failed");
                    stats.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(stats)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory JobStore with the same first-write-wins semantics as the
    /// Postgres adapter
    #[derive(Default)]
    pub struct InMemoryJobStore {
        rows: Mutex<BTreeMap<String, JobRecord>>,
    }

    impl InMemoryJobStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        pub fn get(&self, job_id: &str) -> Option<JobRecord> {
            self.rows.lock().unwrap().get(job_id).cloned()
        }

        /// Snapshot of all rows in job_id order
        pub fn rows(&self) -> Vec<JobRecord> {
            self.rows.lock().unwrap().values().cloned().collect()
        }
    }

    #[async_trait]
    impl JobStore for InMemoryJobStore {
        async fn ensure_schema(&self) -> Result<()> {
            Ok(())
        }

        async fn upsert_if_absent(&self, record: &JobRecord) -> Result<UpsertOutcome> {
            if record.job_id.is_empty() {
                return Err(AppError::RowInsert {
                    job_id: String::new(),
                    reason: "empty job_id".to_string(),
                });
            }

            let mut rows = self.rows.lock().unwrap();
            if rows.contains_key(&record.job_id) {
                return Ok(UpsertOutcome::Skipped);
            }
            rows.insert(record.job_id.clone(), record.clone());
            Ok(UpsertOutcome::Inserted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::InMemoryJobStore;
    use super::*;

    fn record(job_id: &str, title: &str) -> JobRecord {
        JobRecord {
            job_id: job_id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_is_skipped_and_row_unchanged() {
        let store = InMemoryJobStore::new();

        let first = record("j1", "Data Engineer");
        assert_eq!(
            store.upsert_if_absent(&first).await.unwrap(),
            UpsertOutcome::Inserted
        );

        // Same key, different columns: must not overwrite
        let second = record("j1", "Senior Data Engineer");
        assert_eq!(
            store.upsert_if_absent(&second).await.unwrap(),
            UpsertOutcome::Skipped
        );

        assert_eq!(store.get("j1").unwrap().title, "Data Engineer");
    }

    #[tokio::test]
    async fn test_empty_job_id_rejected() {
        let store = InMemoryJobStore::new();
        let err = store
            .upsert_if_absent(&record("", "No Key"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RowInsert { .. }));
    }

    #[tokio::test]
    async fn test_upsert_all_counts_failures_and_continues() {
        let store = InMemoryJobStore::new();
        let records = vec![
            record("j1", "A"),
            record("", "broken"),
            record("j2", "B"),
            record("j1", "A again"),
        ];

        let stats = store.upsert_all(&records).await.unwrap();
        assert_eq!(stats.inserted, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(store.len(), 2);
    }
}
