// Job Domain Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// External job identifier issued by the search API (primary key in the store)
pub type JobId = String;

/// Opaque continuation token issued by the search API.
/// Absence signifies end-of-results.
pub type PaginationToken = String;

/// One normalized job posting, ready for persistence.
///
/// Every field is a plain string; absent source data becomes the empty
/// string, never NULL in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: JobId,
    pub title: String,
    pub location: String,
    pub company_name: String,
    pub description: String,
    pub qualifications: String,
    pub benefits: String,
    pub responsibilities: String,
    pub posted_at: String,
    pub schedule_type: String,
    pub dental_coverage: String,
    pub health_coverage: String,
}

/// One titled group of bullet-point strings within a job listing
/// (e.g., "Qualifications")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobHighlight {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One API-provided job entry before normalization.
///
/// Every field defaults so a partially populated or malformed entry
/// deserializes rather than fails. `detected_extensions` values are kept as
/// raw JSON because the live API mixes strings and booleans there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJobPayload {
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_highlights: Vec<JobHighlight>,
    #[serde(default)]
    pub detected_extensions: HashMap<String, serde_json::Value>,
}

/// One page of search results: the ordered job entries found on the page and
/// the continuation token for the next page (absent = last page).
#[derive(Debug, Clone, Default)]
pub struct JobPage {
    pub jobs: Vec<RawJobPayload>,
    pub next_page_token: Option<PaginationToken>,
}

impl JobPage {
    pub fn new(jobs: Vec<RawJobPayload>, next_page_token: Option<PaginationToken>) -> Self {
        Self {
            jobs,
            next_page_token,
        }
    }
}
