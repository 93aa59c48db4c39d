// Port Layer - Interfaces for external dependencies

pub mod cursor_store;
pub mod job_store;
pub mod page_fetcher;

// Re-exports
pub use cursor_store::CursorStore;
pub use job_store::{JobStore, UpsertOutcome, UpsertStats};
pub use page_fetcher::PageFetcher;
