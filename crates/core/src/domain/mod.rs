// Domain Layer - Pure entities of the ingest pipeline

pub mod job;

// Re-exports
pub use job::{JobHighlight, JobId, JobPage, JobRecord, PaginationToken, RawJobPayload};
