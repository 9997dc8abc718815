use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub schema_path: String,
    pub output_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openrouter_api_key: require_env("OPENROUTER_API_KEY")?,
            schema_path: std::env::var("SCHEMA_PATH")
                .unwrap_or_else(|_| "config/dictionary.yaml".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
