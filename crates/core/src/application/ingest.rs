// Ingest Use Case - one full pipeline invocation

use crate::application::Crawler;
use crate::domain::JobRecord;
use crate::error::Result;
use crate::port::{JobStore, UpsertStats};
use std::sync::Arc;
use tracing::info;

/// Result of one ingest run
#[derive(Debug, Clone, Copy)]
pub struct IngestSummary {
    /// Records accumulated across all fetched pages
    pub fetched: usize,
    pub stats: UpsertStats,
}

/// Orchestrates one invocation: crawl the query to completion, ensure the
/// schema exists, then upsert the accumulated records.
pub struct IngestService {
    crawler: Crawler,
    store: Arc<dyn JobStore>,
}

impl IngestService {
    pub fn new(crawler: Crawler, store: Arc<dyn JobStore>) -> Self {
        Self { crawler, store }
    }

    pub async fn run(&self, query: &str) -> Result<IngestSummary> {
        info!(query = %query, "Starting ingest");

        let records: Vec<JobRecord> = self.crawler.run(query).await?;

        self.store.ensure_schema().await?;
        let stats = self.store.upsert_all(&records).await?;

        info!(
            fetched = records.len(),
            inserted = stats.inserted,
            skipped = stats.skipped,
            failed = stats.failed,
            "Ingest complete"
        );

        Ok(IngestSummary {
            fetched: records.len(),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobPage, RawJobPayload};
    use crate::port::cursor_store::mocks::InMemoryCursorStore;
    use crate::port::job_store::mocks::InMemoryJobStore;
    use crate::port::page_fetcher::mocks::ScriptedFetcher;

    fn raw(job_id: &str) -> RawJobPayload {
        RawJobPayload {
            job_id: job_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ingest_persists_all_fetched_records() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            JobPage::new(vec![raw("a"), raw("b")], Some("T1".to_string())),
            JobPage::new(vec![raw("c")], None),
        ]));
        let cursor = Arc::new(InMemoryCursorStore::new());
        let store = Arc::new(InMemoryJobStore::new());

        let service = IngestService::new(Crawler::new(fetcher, cursor), store.clone());
        let summary = service.run("q").await.unwrap();

        assert_eq!(summary.fetched, 3);
        assert_eq!(summary.stats.inserted, 3);
        assert_eq!(summary.stats.skipped, 0);
        assert_eq!(store.len(), 3);
    }
}
