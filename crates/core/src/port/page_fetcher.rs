// Page Fetcher Port (Interface)

use crate::domain::JobPage;
use crate::error::Result;
use async_trait::async_trait;

/// One search request against the external job API.
///
/// Implementations:
/// - SerpApiClient (infra-serpapi): HTTPS against the google_jobs engine
/// - mocks::ScriptedFetcher: scripted pages for tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of results for `query`.
    ///
    /// `page_token`, if present, must be a token previously returned by the
    /// same API for the same query. Issues exactly one outbound request.
    ///
    /// # Errors
    /// - AppError::Fetch on network or API failure (the caller does not retry)
    async fn fetch_page(&self, query: &str, page_token: Option<&str>) -> Result<JobPage>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted fetcher: serves a fixed sequence of pages in order and
    /// records the token passed to each call.
    pub struct ScriptedFetcher {
        pages: Mutex<VecDeque<JobPage>>,
        seen_tokens: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedFetcher {
        pub fn new(pages: Vec<JobPage>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                seen_tokens: Mutex::new(Vec::new()),
            }
        }

        /// Tokens observed across all calls, in call order
        pub fn seen_tokens(&self) -> Vec<Option<String>> {
            self.seen_tokens.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.seen_tokens.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch_page(&self, _query: &str, page_token: Option<&str>) -> Result<JobPage> {
            self.seen_tokens
                .lock()
                .unwrap()
                .push(page_token.map(|t| t.to_string()));

            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| AppError::Fetch("scripted fetcher exhausted".to_string()))
        }
    }

    /// Fetcher that always fails, for fatal-path tests
    pub struct FailingFetcher {
        message: String,
    }

    impl FailingFetcher {
        pub fn new(message: impl Into<String>) -> Self {
            Self {
                message: message.into(),
            }
        }
    }

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch_page(&self, _query: &str, _page_token: Option<&str>) -> Result<JobPage> {
            Err(AppError::Fetch(self.message.clone()))
        }
    }
}
