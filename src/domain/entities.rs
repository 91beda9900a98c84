//! Domain entities. Pure data structures for the core business.
//!
//! Nothing here outlives a single request; no persistence types.

use super::errors::AssessmentError;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Supplemental document text is capped at this many characters before it enters the prompt.
pub const MAX_SUPPLEMENTAL_CHARS: usize = 4000;

/// Input to a symptom assessment. Built per call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentRequest {
    pub symptoms: String,
    pub duration: String,
    pub supplemental_text: Option<String>,
}

impl AssessmentRequest {
    pub fn new(
        symptoms: impl Into<String>,
        duration: impl Into<String>,
        supplemental_text: Option<String>,
    ) -> Self {
        Self {
            symptoms: symptoms.into(),
            duration: duration.into(),
            supplemental_text,
        }
    }

    /// Symptoms are checked before duration; blank means empty after trimming.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.symptoms.trim().is_empty() {
            return Err(AssessmentError::MissingSymptoms);
        }
        if self.duration.trim().is_empty() {
            return Err(AssessmentError::MissingDuration);
        }
        Ok(())
    }

    /// Supplemental text cut to the first `MAX_SUPPLEMENTAL_CHARS` characters.
    /// Returns `None` when absent or blank after truncation.
    pub fn truncated_supplement(&self) -> Option<&str> {
        let text = self.supplemental_text.as_deref()?;
        let end = text
            .char_indices()
            .nth(MAX_SUPPLEMENTAL_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len());
        let truncated = &text[..end];
        if truncated.trim().is_empty() {
            None
        } else {
            Some(truncated)
        }
    }
}

/// Successful assessment: the provider's trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub text: String,
}

/// A user-supplied file (PDF or plain text) whose text may enrich the prompt.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Kind inferred from the file extension (case-insensitive).
    pub fn kind(&self) -> Option<DocumentKind> {
        let ext = self.file_name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Services offered in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    SymptomAssessment,
    AppointmentScheduling,
    MedicationReminders,
    HealthInformation,
    PatientSupport,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::SymptomAssessment,
        Service::AppointmentScheduling,
        Service::MedicationReminders,
        Service::HealthInformation,
        Service::PatientSupport,
    ];
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Service::SymptomAssessment => "Symptom Assessment",
            Service::AppointmentScheduling => "Appointment Scheduling",
            Service::MedicationReminders => "Medication Reminders",
            Service::HealthInformation => "Health Information",
            Service::PatientSupport => "Patient Support",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    GeneralPractice,
    Cardiology,
    Orthopedics,
    Gynecology,
    Dermatology,
    Pediatrics,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::GeneralPractice,
        Department::Cardiology,
        Department::Orthopedics,
        Department::Gynecology,
        Department::Dermatology,
        Department::Pediatrics,
    ];
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Department::GeneralPractice => "General Practice",
            Department::Cardiology => "Cardiology",
            Department::Orthopedics => "Orthopedics",
            Department::Gynecology => "Gynecology",
            Department::Dermatology => "Dermatology",
            Department::Pediatrics => "Pediatrics",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub department: Department,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationReminder {
    pub medication: String,
    pub dosage: String,
    /// Free text, e.g. "9:00 AM, 6:00 PM" or "Every 8 hours".
    pub times: String,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequest {
    pub full_name: String,
    pub email: String,
    pub concern: String,
    pub privacy_agreed: bool,
}

/// Confirmation shown after a form service accepts a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub headline: String,
    pub follow_up: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_char_count_not_bytes() {
        let long: String = "é".repeat(MAX_SUPPLEMENTAL_CHARS + 10);
        let req = AssessmentRequest::new("x", "y", Some(long));
        let cut = req.truncated_supplement().unwrap();
        assert_eq!(cut.chars().count(), MAX_SUPPLEMENTAL_CHARS);
    }

    #[test]
    fn short_supplement_kept_whole() {
        let req = AssessmentRequest::new("x", "y", Some("lab results".into()));
        assert_eq!(req.truncated_supplement(), Some("lab results"));
    }

    #[test]
    fn blank_supplement_is_none() {
        let req = AssessmentRequest::new("x", "y", Some("   \n".into()));
        assert_eq!(req.truncated_supplement(), None);
        let req = AssessmentRequest::new("x", "y", None);
        assert_eq!(req.truncated_supplement(), None);
    }

    #[test]
    fn validate_checks_symptoms_first() {
        let req = AssessmentRequest::new(" ", "", None);
        assert_eq!(req.validate(), Err(AssessmentError::MissingSymptoms));
        let req = AssessmentRequest::new("cough", "\t", None);
        assert_eq!(req.validate(), Err(AssessmentError::MissingDuration));
        let req = AssessmentRequest::new("cough", "2 days", None);
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn document_kind_from_extension() {
        assert_eq!(
            UploadedDocument::new("Report.PDF", vec![]).kind(),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            UploadedDocument::new("notes.txt", vec![]).kind(),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(UploadedDocument::new("scan.png", vec![]).kind(), None);
        assert_eq!(UploadedDocument::new("README", vec![]).kind(), None);
    }
}
