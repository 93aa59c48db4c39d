// Crawler - Pagination driver loop

use crate::application::normalize;
use crate::domain::JobRecord;
use crate::error::Result;
use crate::port::{CursorStore, PageFetcher};
use std::sync::Arc;
use tracing::info;

/// Drives pagination over the job API for one query: fetch page, normalize
/// every job on it, accumulate, persist the cursor, stop when no token or no
/// jobs remain.
pub struct Crawler {
    fetcher: Arc<dyn PageFetcher>,
    cursor: Arc<dyn CursorStore>,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cursor: Arc<dyn CursorStore>) -> Self {
        Self { fetcher, cursor }
    }

    /// Run the crawl to completion, resuming from any persisted token.
    ///
    /// Returns the full ordered sequence of records accumulated across all
    /// pages, in page order then within-page order. A fetch failure is fatal
    /// (no retry). There is no iteration cap: an API that never exhausts
    /// pagination loops unboundedly.
    pub async fn run(&self, query: &str) -> Result<Vec<JobRecord>> {
        let mut token = self.cursor.load()?;
        if let Some(t) = &token {
            info!(token = %t, "Resuming crawl from persisted token");
        }

        let mut records: Vec<JobRecord> = Vec::new();
        let mut page_count: u64 = 0;

        loop {
            page_count += 1;
            let page = self.fetcher.fetch_page(query, token.as_deref()).await?;

            if page.jobs.is_empty() {
                // Note: a pre-existing saved token from a prior partial run
                // is left in place here.
                info!(page = page_count, "Empty page, crawl done");
                break;
            }

            records.extend(page.jobs.iter().map(normalize));
            info!(
                page = page_count,
                page_jobs = page.jobs.len(),
                total_jobs = records.len(),
                "Fetched page"
            );

            match page.next_page_token {
                Some(next) => {
                    self.cursor.save(Some(&next))?;
                    token = Some(next);
                }
                None => {
                    self.cursor.save(None)?;
                    info!(page = page_count, "No next token, crawl done");
                    break;
                }
            }
        }

        info!(total_jobs = records.len(), "Crawl finished");
        Ok(records)
    }
}
