//! AI adapter module. Implements TextGenerationPort for LLM providers.
//!
//! Provides Gemini and OpenAI-compatible adapters plus a mock adapter for offline use.

pub mod gemini_adapter;
pub mod mock_adapter;
pub mod openai_adapter;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockAiAdapter;
pub use openai_adapter::OpenAiAdapter;

use crate::domain::DomainError;
use std::time::Duration;

/// Build the shared HTTP client. No timeout unless one is configured.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, DomainError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| DomainError::Provider(format!("Failed to build HTTP client: {}", e)))
}
