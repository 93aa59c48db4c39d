// PostgreSQL JobStore Implementation

use async_trait::async_trait;
use jobsift_core::domain::JobRecord;
use jobsift_core::error::{AppError, Result};
use jobsift_core::port::{JobStore, UpsertOutcome};
use sqlx::PgPool;
use tracing::info;

// Helper to convert sqlx::Error into the narrow taxonomy: constraint and
// data errors are recoverable per row, everything else means the store is
// unreachable
fn map_sqlx_error(job_id: &str, err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.as_ref().to_string());
            match code.as_deref() {
                // 23505: unique_violation, 23502: not_null_violation,
                // 22xxx: data exceptions (malformed value)
                Some(c) if c == "23505" || c == "23502" || c.starts_with("22") => {
                    AppError::RowInsert {
                        job_id: job_id.to_string(),
                        reason: format!("{} ({})", db_err.message(), c),
                    }
                }
                Some(c) => {
                    AppError::Connection(format!("database error [{}]: {}", c, db_err.message()))
                }
                None => AppError::Connection(format!("database error: {}", db_err.message())),
            }
        }
        _ => AppError::Connection(err.to_string()),
    }
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn ensure_schema(&self) -> Result<()> {
        info!("Ensuring jobs table exists");
        sqlx::query(include_str!("../schema/001_jobs.sql"))
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn upsert_if_absent(&self, record: &JobRecord) -> Result<UpsertOutcome> {
        if record.job_id.is_empty() {
            return Err(AppError::RowInsert {
                job_id: String::new(),
                reason: "empty job_id".to_string(),
            });
        }

        // Check-then-insert: first write wins, duplicates are dropped
        let exists: Option<String> = sqlx::query_scalar("SELECT job_id FROM jobs WHERE job_id = $1")
            .bind(&record.job_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Connection(e.to_string()))?;

        if exists.is_some() {
            return Ok(UpsertOutcome::Skipped);
        }

        sqlx::query(
            r#"
            INSERT INTO jobs (
                job_id, title, location, company_name, description,
                qualifications, benefits, responsibilities,
                posted_at, schedule_type, dental_coverage, health_coverage
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(&record.job_id)
        .bind(&record.title)
        .bind(&record.location)
        .bind(&record.company_name)
        .bind(&record.description)
        .bind(&record.qualifications)
        .bind(&record.benefits)
        .bind(&record.responsibilities)
        .bind(&record.posted_at)
        .bind(&record.schedule_type)
        .bind(&record.dental_coverage)
        .bind(&record.health_coverage)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(&record.job_id, e))?;

        Ok(UpsertOutcome::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(job_id: &str, title: &str) -> JobRecord {
        JobRecord {
            job_id: job_id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    async fn test_pool() -> PgPool {
        let url = std::env::var("JOBSIFT_TEST_DATABASE_URL")
            .expect("JOBSIFT_TEST_DATABASE_URL must point at a scratch database");
        PgPool::connect(&url).await.unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL server (set JOBSIFT_TEST_DATABASE_URL)"]
    async fn test_insert_then_skip() {
        let store = PgJobStore::new(test_pool().await);
        store.ensure_schema().await.unwrap();

        let job_id = format!("it-{}", std::process::id());
        let first = record(&job_id, "Data Engineer");
        assert_eq!(
            store.upsert_if_absent(&first).await.unwrap(),
            UpsertOutcome::Inserted
        );

        let second = record(&job_id, "Changed Title");
        assert_eq!(
            store.upsert_if_absent(&second).await.unwrap(),
            UpsertOutcome::Skipped
        );

        let title: String = sqlx::query_scalar("SELECT title FROM jobs WHERE job_id = $1")
            .bind(&job_id)
            .fetch_one(&store.pool)
            .await
            .unwrap();
        assert_eq!(title, "Data Engineer");

        sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(&job_id)
            .execute(&store.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL server (set JOBSIFT_TEST_DATABASE_URL)"]
    async fn test_upsert_all_is_idempotent() {
        let store = PgJobStore::new(test_pool().await);
        store.ensure_schema().await.unwrap();

        let prefix = format!("batch-{}", std::process::id());
        let records: Vec<JobRecord> = (0..3)
            .map(|i| record(&format!("{}-{}", prefix, i), "Engineer"))
            .collect();

        let first = store.upsert_all(&records).await.unwrap();
        assert_eq!(first.inserted, 3);

        let second = store.upsert_all(&records).await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 3);

        sqlx::query("DELETE FROM jobs WHERE job_id LIKE $1")
            .bind(format!("{}%", prefix))
            .execute(&store.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_job_id_rejected_without_touching_db() {
        // No pool needed to hit the validation path, but the struct wants one;
        // a lazy pool never connects until used.
        let pool = PgPool::connect_lazy("postgres://localhost/unused").unwrap();
        let store = PgJobStore::new(pool);

        let err = store
            .upsert_if_absent(&record("", "No Key"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RowInsert { .. }));
    }
}
