//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, UploadedDocument};

/// Generative text provider (Gemini, OpenAI-compatible, mock).
///
/// Constructed once at startup and shared read-only; holds no per-request state.
#[async_trait::async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Send `prompt` as a single user message and return the generated text.
    ///
    /// # Errors
    /// Returns `DomainError::Provider` on network, auth, quota or malformed-response failures.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Short identifier for logs (e.g. "gemini:gemini-1.5-flash").
    fn name(&self) -> String;
}

/// Document text extractor. Turns an uploaded PDF or TXT into plain text.
pub trait DocumentExtractorPort: Send + Sync {
    /// Extract plain text from `document`.
    ///
    /// # Errors
    /// Returns `DomainError::Extraction` for unsupported types or unreadable content.
    fn extract_text(&self, document: &UploadedDocument) -> Result<String, DomainError>;
}
