use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub listings_ttl_secs: i64,
    pub session_ttl_secs: i64,
    pub http_timeout: Duration,
    /// Service bearer token for listing fetches when nobody is signed in.
    pub api_token: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = get("API_URL").context("API_URL must be set")?;

        Ok(Self {
            api_url: Url::parse(&api_url).context("API_URL must be a valid URL")?,
            bind_addr: get("BIND_ADDR")
                .unwrap_or_else(|| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be host:port")?,
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "sterling.sqlite3".to_string()),
            schema_path: get("SCHEMA_PATH").unwrap_or_else(|| "sql/schema.sql".to_string()),
            max_workers: parse_or(&get, "MAX_WORKERS", 8)?,
            listings_ttl_secs: parse_or(&get, "LISTINGS_TTL_SECS", 60)?,
            session_ttl_secs: parse_or(&get, "SESSION_TTL_SECS", 60 * 60 * 24 * 7)?,
            http_timeout: Duration::from_secs(parse_or(&get, "HTTP_TIMEOUT_SECS", 30)?),
            api_token: get("API_TOKEN").filter(|t| !t.trim().is_empty()),
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a valid number")),
        None => Ok(default),
    }
}
