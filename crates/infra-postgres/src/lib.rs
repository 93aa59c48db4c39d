// jobsift Infrastructure - PostgreSQL Adapter
// Implements: JobStore

mod connection;
mod job_store;

pub use connection::{create_pool, PgConfig};
pub use job_store::PgJobStore;

// Note: sqlx::Error conversion is handled by a helper in job_store
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
