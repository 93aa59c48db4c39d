// PostgreSQL Connection Pool Setup

use jobsift_core::error::{AppError, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::time::Duration;

/// Connection parameters for the relational store, supplied via environment
/// configuration by the composition root
#[derive(Debug, Clone)]
pub struct PgConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub sslmode: String,
    pub connect_timeout_secs: u64,
}

fn parse_ssl_mode(sslmode: &str) -> Result<PgSslMode> {
    match sslmode {
        "disable" => Ok(PgSslMode::Disable),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        "verify-ca" => Ok(PgSslMode::VerifyCa),
        "verify-full" => Ok(PgSslMode::VerifyFull),
        other => Err(AppError::Config(format!("unknown sslmode: {}", other))),
    }
}

/// Create a PostgreSQL connection pool.
///
/// The pool is the single shared handle used sequentially for schema
/// creation and every row check/insert.
pub async fn create_pool(config: &PgConfig) -> Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.dbname)
        .ssl_mode(parse_ssl_mode(&config.sslmode)?);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| AppError::Connection(e.to_string()))?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssl_mode() {
        assert!(matches!(parse_ssl_mode("require"), Ok(PgSslMode::Require)));
        assert!(matches!(parse_ssl_mode("disable"), Ok(PgSslMode::Disable)));
        assert!(matches!(
            parse_ssl_mode("bogus"),
            Err(AppError::Config(_))
        ));
    }
}
