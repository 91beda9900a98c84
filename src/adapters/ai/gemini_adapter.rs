//! Google Gemini adapter (generateContent REST API).
//!
//! Implements `TextGenerationPort` with a single user turn and plain-text output.

use crate::domain::DomainError;
use crate::ports::TextGenerationPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Gemini text-generation adapter.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_url` - Base URL up to the API version (e.g. "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - Google AI Studio key, sent as `x-goog-api-key`
    /// * `model` - Model name (e.g. "gemini-1.5-flash", "gemini-1.5-pro")
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

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[async_trait::async_trait]
impl TextGenerationPort for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending prompt to Gemini"
        );

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Gemini API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("Failed to parse API response: {}", e)))?;

        let Some(content) = body.candidates.into_iter().find_map(|c| c.content) else {
            let reason = body
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(DomainError::Provider(format!("Empty response: {}", reason)));
        };

        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        if text.trim().is_empty() {
            return Err(DomainError::Provider("Response contained no text".to_string()));
        }

        debug!(response_len = text.len(), "received Gemini response");
        Ok(text)
    }

    fn name(&self) -> String {
        format!("gemini:{}", self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(url: &str) -> GeminiAdapter {
        GeminiAdapter::new(
            url.to_string(),
            "test-key".to_string(),
            DEFAULT_GEMINI_MODEL.to_string(),
            0.6,
        )
    }

    #[tokio::test]
    async fn joins_candidate_parts() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                "generationConfig": {"temperature": 0.6}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"- Possible cause: "},{"text":"viral infection"}]}}]}"#,
            )
            .create_async()
            .await;

        let text = adapter(&server.url()).generate("hello").await.unwrap();
        assert_eq!(text, "- Possible cause: viral infection");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_error_carries_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(429)
            .with_body("Resource has been exhausted")
            .create_async()
            .await;

        let err = adapter(&server.url()).generate("hello").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("429"), "{message}");
        assert!(message.contains("Resource has been exhausted"));
    }

    #[tokio::test]
    async fn blocked_prompt_reports_reason() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .create_async()
            .await;

        let err = adapter(&server.url()).generate("hello").await.unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let a = adapter("https://example.test/v1beta/");
        assert_eq!(
            a.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
