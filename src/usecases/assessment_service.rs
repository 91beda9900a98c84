//! Symptom assessment. Builds the prompt and delegates to the text-generation provider.
//!
//! Stateless: every call validates, assembles, invokes once and normalizes the outcome.
//! No retries, no caching.

use crate::domain::{Assessment, AssessmentError, AssessmentRequest};
use crate::ports::TextGenerationPort;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed instruction segment appended to every assessment prompt.
pub const ASSESSMENT_INSTRUCTIONS: &str = "Give a preliminary health insight (not a diagnosis). \
List the possible causes, classify the severity as mild, moderate, or critical, \
state whether the situation is urgent, and recommend next steps or the relevant medical department to consult. \
Keep the response concise and use short bullet points.";

/// Shown alongside every successful assessment.
pub const DISCLAIMER: &str = "⚠️ Disclaimer: This assessment is for informational purposes only and is not a substitute \
for professional medical advice, diagnosis, or treatment. Always seek the advice of a qualified healthcare provider \
for any medical concerns.";

/// Symptom-assessment request builder.
///
/// Holds only the shared provider handle, so one instance may serve any number of calls.
pub struct AssessmentService {
    provider: Arc<dyn TextGenerationPort>,
}

impl AssessmentService {
    /// Create a new assessment service.
    ///
    /// # Arguments
    /// * `provider` - Text-generation port implementation (Gemini, OpenAI, Mock, etc.)
    pub fn new(provider: Arc<dyn TextGenerationPort>) -> Self {
        Self { provider }
    }

    /// Assess symptoms. Short-circuits on blank symptoms or duration without calling the provider.
    pub async fn assess(
        &self,
        symptoms: &str,
        duration: &str,
        supplemental_text: Option<String>,
    ) -> Result<Assessment, AssessmentError> {
        let request = AssessmentRequest::new(symptoms, duration, supplemental_text);
        self.assess_request(&request).await
    }

    /// Same as [`assess`](Self::assess) for an already-built request.
    pub async fn assess_request(
        &self,
        request: &AssessmentRequest,
    ) -> Result<Assessment, AssessmentError> {
        let prompt = build_prompt(request)?;

        info!(
            provider = %self.provider.name(),
            prompt_len = prompt.len(),
            has_supplement = request.truncated_supplement().is_some(),
            "requesting symptom assessment"
        );

        match self.provider.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("assessment provider returned blank text");
                Err(AssessmentError::Provider(
                    "Response contained no text".to_string(),
                ))
            }
            Ok(text) => {
                let text = text.trim().to_string();
                debug!(response_len = text.len(), "assessment received");
                Ok(Assessment { text })
            }
            Err(e) => {
                warn!(error = %e, "assessment provider call failed");
                Err(AssessmentError::Provider(e.to_string()))
            }
        }
    }
}

/// Assemble the prompt: symptoms, duration, optional supplement, instructions.
///
/// Fails with the matching advisory when a required field is blank.
pub fn build_prompt(request: &AssessmentRequest) -> Result<String, AssessmentError> {
    request.validate()?;
    let symptoms = request.symptoms.trim();
    let duration = request.duration.trim();

    let mut parts = vec![
        format!("I have the following symptoms: {}.", symptoms),
        format!("These symptoms have been present for {}.", duration),
    ];
    if let Some(supplement) = request.truncated_supplement() {
        parts.push(format!(
            "Attached is additional medical information: {}.",
            supplement
        ));
    }
    parts.push(ASSESSMENT_INSTRUCTIONS.to_string());

    Ok(parts.join(" "))
}
