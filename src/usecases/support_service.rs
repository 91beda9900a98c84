//! Patient support contact form.

use crate::domain::{Acknowledgement, DomainError, SupportRequest};
use tracing::info;

const MISSING_FIELDS: &str =
    "⚠️ Please fill in all fields and agree to the terms to request support.";

pub struct SupportService;

impl SupportService {
    pub fn new() -> Self {
        Self
    }

    /// All fields are required and the privacy box must be ticked.
    pub fn submit(&self, request: &SupportRequest) -> Result<Acknowledgement, DomainError> {
        let full_name = request.full_name.trim();
        let email = request.email.trim();
        let concern = request.concern.trim();
        if full_name.is_empty() || email.is_empty() || concern.is_empty() || !request.privacy_agreed
        {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }

        info!(concern_len = concern.len(), "support request accepted");

        Ok(Acknowledgement {
            headline: "🙏 Thank you for sharing your concern. Our wellness coach will get back to you via email shortly.".to_string(),
            follow_up: format!(
                "Concern submitted by: {} ({})\nYour Message: {}",
                full_name, email, concern
            ),
        })
    }
}

impl Default for SupportService {
    fn default() -> Self {
        Self::new()
    }
}
