use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails with context if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub marketplace_api_url: String,
    pub marketplace_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Per-submission deadline inside an auto-submit batch.
    pub submit_timeout_secs: u64,
    /// Max proposals in flight. 1 keeps submissions strictly sequential.
    pub submit_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            marketplace_api_url: require_env("MARKETPLACE_API_URL")?,
            marketplace_api_key: require_env("MARKETPLACE_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            submit_timeout_secs: std::env::var("SUBMIT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("SUBMIT_TIMEOUT_SECS must be a number of seconds")?,
            submit_concurrency: std::env::var("SUBMIT_CONCURRENCY")
                .unwrap_or_else(|_| "1".to_string())
                .parse::<usize>()
                .context("SUBMIT_CONCURRENCY must be a positive integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
