use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `GOOGLE_API_KEY` is deliberately optional: the service starts without it
/// and the model-backed endpoints report the missing client per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: std::env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
