use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origin hosting `/.netlify/functions/generate-career-insights`.
    pub insights_base_url: String,
    pub insights_timeout: Duration,
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let insights_timeout_secs = lookup("INSIGHTS_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("INSIGHTS_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            insights_base_url: lookup("INSIGHTS_BASE_URL")
                .unwrap_or_else(|| format!("http://127.0.0.1:{port}")),
            insights_timeout: Duration::from_secs(insights_timeout_secs),
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
        })
    }
}
