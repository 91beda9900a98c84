//! OpenAI-compatible adapter.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `TextGenerationPort` with one user message and plain-text output.

use crate::domain::DomainError;
use crate::ports::TextGenerationPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible text-generation adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `temperature` - Sampling temperature
    pub fn new(api_url: String, api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            temperature,
        }
    }

    /// Replace the HTTP client (e.g. one built with a request timeout).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl TextGenerationPort for OpenAiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to OpenAI-compatible API"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json");
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "AI API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("Failed to parse API response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Provider("No response choices returned".to_string()))?;
        if content.trim().is_empty() {
            return Err(DomainError::Provider("Response contained no text".to_string()));
        }

        debug!(response_len = content.len(), "received AI response");

        Ok(content)
    }

    fn name(&self) -> String {
        format!("openai:{}", self.model)
    }
}
