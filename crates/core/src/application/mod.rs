// Application Layer - Use Cases

pub mod crawl;
pub mod ingest;
pub mod normalize;

// Re-exports
pub use crawl::Crawler;
pub use ingest::{IngestService, IngestSummary};
pub use normalize::normalize;
