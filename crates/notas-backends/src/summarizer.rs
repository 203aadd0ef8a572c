//! One-sentence note summarization via an OpenAI-compatible chat API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Model used for all summarization requests.
pub const SUMMARY_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature for summarization.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Output token cap; one sentence fits comfortably.
pub const SUMMARY_MAX_TOKENS: u32 = 60;

/// Default OpenAI API endpoint.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Substituted when the backend returns a choice with no content.
const NO_SUMMARY: &str = "(No summary)";

const SYSTEM_PROMPT: &str =
    "You are an assistant that summarizes personal notes in one short sentence.";

/// Failure obtaining a summary from the backend.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// The backend answered with a non-success status. The raw body is kept
    /// so the handler can echo it in the 502 `details` field.
    #[error("summarization backend returned status {status}")]
    Backend { status: u16, body: String },

    /// The backend could not be reached or returned an unreadable body.
    #[error("summarization backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Produces a one-sentence summary of note text.
#[async_trait]
pub trait NoteSummarizer: Send + Sync {
    /// Summarize `text` in one sentence.
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat completions endpoint.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// Single chat completion choice.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-completions client for the live summarization path.
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiSummarizer {
    /// Create a summarizer for the given endpoint and API key.
    ///
    /// A missing key is allowed here; the server refuses to take the live
    /// path without one before any request is built.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn build_request(&self, text: &str) -> ChatCompletionRequest {
        let prompt = format!(
            "Summarize the following note in one sentence without adding new info. Note: \"{text}\""
        );
        ChatCompletionRequest {
            model: SUMMARY_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
        }
    }
}

#[async_trait]
impl NoteSummarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let mut request = self.client.post(&url).json(&self.build_request(text));
        if let Some(ref api_key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Summarization backend returned an error"
            );
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let summary = completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|content| !content.is_empty())
            .unwrap_or(NO_SUMMARY);

        Ok(summary.to_string())
    }
}
