mod config;
mod errors;
mod extraction;
mod interview;
mod llm_client;
mod output;
mod schema;
mod validator;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::pipeline::extract_profile;
use crate::interview::transcript::parse_transcript;
use crate::llm_client::LlmClient;
use crate::schema::parse_schema;

const DEFAULT_INTERVIEW_PATH: &str = "input/interview.json";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting profile extractor v{}", env!("CARGO_PKG_VERSION"));

    let raw_schema = std::fs::read_to_string(&config.schema_path)
        .with_context(|| format!("Failed to read schema file '{}'", config.schema_path))?;
    let schema = parse_schema(&raw_schema, &config.schema_path)?;
    info!("Loaded schema with {} fields", schema.len());

    let interview_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INTERVIEW_PATH.to_string());
    let raw_interview = std::fs::read_to_string(&interview_path)
        .with_context(|| format!("Failed to read interview file '{interview_path}'"))?;
    let transcript = parse_transcript(&raw_interview, &interview_path)?;
    info!("Loaded interview {}", transcript.interview_id);

    let llm = LlmClient::new(config.openrouter_api_key.clone());
    info!("Completion client initialized (model: {})", llm_client::MODEL);

    let profile = extract_profile(&llm, &schema, &transcript).await?;

    let written = output::write_profile(
        Path::new(&config.output_dir),
        &transcript.interview_id,
        &profile,
    )?;
    info!("Profile written to {}", written.display());

    Ok(())
}
