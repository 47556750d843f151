use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. Every value
/// has a default; a malformed override fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Path of the persisted session flag (the browser-storage analog).
    pub session_flag_path: String,
    /// Base URL used when composing share links.
    pub public_base_url: String,
    pub mock_login_delay_ms: u64,
    pub mock_submit_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_flag_path: std::env::var("SESSION_FLAG_PATH")
                .unwrap_or_else(|_| ".session-flag".to_string()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            mock_login_delay_ms: delay_ms("MOCK_LOGIN_DELAY_MS", 1000)?,
            mock_submit_delay_ms: delay_ms("MOCK_SUBMIT_DELAY_MS", 1500)?,
        })
    }
}

fn delay_ms(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .with_context(|| format!("{key} must be a duration in milliseconds")),
        Err(_) => Ok(default),
    }
}
