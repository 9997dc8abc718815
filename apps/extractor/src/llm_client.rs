//! Completion client — the single point of entry for all model calls.
//!
//! No other module may talk to the completion API directly; the pipeline
//! depends on the `CompletionBackend` trait so tests can script replies
//! without a network.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COMPLETIONS_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for both pipeline stages.
pub const MODEL: &str = "openai/gpt-4.1-mini";
const MAX_TOKENS: u32 = 2000;
/// Low temperature — extraction must be reproducible, not creative.
const TEMPERATURE: f64 = 0.1;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

/// The completion boundary: one prompt in, one cleaned text reply out.
///
/// A failed call aborts the current run — there is deliberately no retry
/// here; the caller surfaces the failure.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client for the OpenRouter endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    /// Makes a single call to the completions API and returns the reply text
    /// with markdown fences stripped and whitespace trimmed.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(COMPLETIONS_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", "https://profile-extractor.local")
            .header("X-Title", "Profile Extractor")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the body parses as one
            let message = serde_json::from_str::<ChatResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(err) = chat_response.error {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: err.message,
            });
        }

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("completion reply: {} chars", content.len());

        Ok(clean_completion(&content).to_string())
    }
}

/// Strips a markdown code-fence wrapper (with or without a language tag)
/// from a model reply and trims surrounding whitespace.
pub fn clean_completion(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the rest of the fence line — it may carry a language tag.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest.trim())
}
