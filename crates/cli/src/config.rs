// Environment configuration

use jobsift_core::error::{AppError, Result};
use jobsift_infra_postgres::PgConfig;

const DEFAULT_QUERY: &str = "data engineer seattle";
const DEFAULT_CURSOR_PATH: &str = "pagination_state.json";
const DEFAULT_DB_NAME: &str = "jobs_db";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_SSLMODE: &str = "require";
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once from the environment at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub query: String,
    pub serpapi_api_key: String,
    pub cursor_path: String,
    pub http_timeout_secs: u64,
    pub db: PgConfig,
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| AppError::Config(format!("{} is not set", name)))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{} is not a valid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            query: optional("JOBSIFT_QUERY", DEFAULT_QUERY),
            serpapi_api_key: required("SERPAPI_API_KEY")?,
            cursor_path: optional("JOBSIFT_CURSOR_PATH", DEFAULT_CURSOR_PATH),
            http_timeout_secs: optional_parsed(
                "JOBSIFT_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?,
            db: db_from_env()?,
        })
    }
}

/// Store-only settings (migrate / check-db need no API key)
pub fn db_from_env() -> Result<PgConfig> {
    Ok(PgConfig {
        host: required("DB_HOST")?,
        dbname: optional("DB_NAME", DEFAULT_DB_NAME),
        user: optional("DB_USER", DEFAULT_DB_USER),
        password: required("DB_PASSWORD")?,
        port: optional_parsed("DB_PORT", DEFAULT_DB_PORT)?,
        sslmode: optional("DB_SSLMODE", DEFAULT_DB_SSLMODE),
        connect_timeout_secs: optional_parsed(
            "DB_CONNECT_TIMEOUT_SECS",
            DEFAULT_DB_CONNECT_TIMEOUT_SECS,
        )?,
    })
}

/// Cursor path honoring the env override (clear-cursor needs no other config)
pub fn cursor_path_from_env() -> String {
    optional("JOBSIFT_CURSOR_PATH", DEFAULT_CURSOR_PATH)
}
