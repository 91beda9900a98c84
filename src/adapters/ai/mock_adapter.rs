//! Mock AI adapter for running without API calls.
//!
//! Returns a canned, deterministic assessment for development and demos.

use crate::domain::DomainError;
use crate::ports::TextGenerationPort;
use std::time::Duration;
use tracing::info;

/// Mock text-generation adapter.
///
/// Returns a predetermined response without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TextGenerationPort for MockAiAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] Simulating text generation");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(format!(
            "[MOCK] Preliminary insight for a {}-character prompt (not a diagnosis).\n\
             - Possible causes: common viral infection, seasonal allergy\n\
             - Severity: mild\n\
             - Urgent: no\n\
             - Next steps: rest, fluids; see General Practice if symptoms persist\n\
             Configure an AI API key to get real assessments.",
            prompt.chars().count()
        ))
    }

    fn name(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockAiAdapter::with_delay(1);
        let first = adapter.generate("fever").await.unwrap();
        let second = adapter.generate("fever").await.unwrap();

        assert!(first.starts_with("[MOCK]"));
        assert!(first.contains("Severity"));
        assert_eq!(first, second);
    }
}
