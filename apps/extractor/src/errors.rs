use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type for the extraction pipeline.
///
/// Everything here aborts the run, with one nuance: schema-conformance
/// findings from the validator are NOT routed through this type — the
/// pipeline logs them and keeps going (the repair stage already ran once).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to parse schema '{source_name}': {source}")]
    SchemaParse {
        source_name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse interview '{source_name}': {source}")]
    TranscriptParse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("completion call failed: {0}")]
    Completion(#[from] LlmError),

    #[error("model reply is not valid JSON: {0}")]
    MalformedReply(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
