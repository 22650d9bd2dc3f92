use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// HMAC key for signing bearer tokens.
    pub token_secret: String,
    pub token_ttl_secs: i64,
    /// How many recommendations `/jobs/recommend` returns.
    pub recommend_top_n: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            token_secret: require_env("TOKEN_SECRET")?,
            token_ttl_secs: optional_env("TOKEN_TTL_SECS", "3600")?
                .parse::<i64>()
                .context("TOKEN_TTL_SECS must be an integer number of seconds")?,
            recommend_top_n: optional_env("RECOMMEND_TOP_N", "5")?
                .parse::<usize>()
                .context("RECOMMEND_TOP_N must be a non-negative integer")?,
            port: optional_env("PORT", "8080")?
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) => Ok(value),
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid UTF-8")),
    }
}
