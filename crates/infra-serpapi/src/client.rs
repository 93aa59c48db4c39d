// SerpApi google_jobs client

use async_trait::async_trait;
use jobsift_core::domain::{JobPage, RawJobPayload};
use jobsift_core::error::{AppError, Result};
use jobsift_core::port::PageFetcher;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";
const ENGINE: &str = "google_jobs";

/// SerpApi search response, reduced to the fields the pipeline consumes
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    jobs_results: Vec<RawJobPayload>,
    serpapi_pagination: Option<SerpApiPagination>,
}

#[derive(Debug, Deserialize)]
struct SerpApiPagination {
    next_page_token: Option<String>,
}

/// HTTP client for the SerpApi google_jobs engine
pub struct SerpApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: impl Into<String>, connect_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| AppError::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint (tests against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl PageFetcher for SerpApiClient {
    async fn fetch_page(&self, query: &str, page_token: Option<&str>) -> Result<JobPage> {
        let mut params = vec![
            ("q", query),
            ("engine", ENGINE),
            ("api_key", self.api_key.as_str()),
            ("output", "json"),
        ];
        if let Some(token) = page_token {
            params.push(("next_page_token", token));
        }

        debug!(query = %query, resuming = page_token.is_some(), "Requesting search page");

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "search API returned {}: {}",
                status, body
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("undecodable search response: {}", e)))?;

        let next_page_token = search
            .serpapi_pagination
            .and_then(|p| p.next_page_token);

        Ok(JobPage::new(search.jobs_results, next_page_token))
    }
}
