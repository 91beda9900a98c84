//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("AI provider error: {0}")]
    Provider(String),

    #[error("Document extraction failed: {0}")]
    Extraction(String),

    /// A form was submitted with missing or invalid fields. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("UI error: {0}")]
    Ui(String),
}

/// Failure of a symptom assessment.
///
/// The two missing-input variants are advisory and raised before any provider call.
/// `Display` renders the user-facing message for each.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("⚠️ Please describe your symptoms to proceed.")]
    MissingSymptoms,

    #[error("⚠️ Please provide the duration of your symptoms.")]
    MissingDuration,

    #[error("❌ Error generating response: {0}")]
    Provider(String),
}

impl AssessmentError {
    /// True for the advisory variants (caller should correct input and resubmit).
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingSymptoms | Self::MissingDuration)
    }
}
