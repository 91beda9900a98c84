//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod topics;

pub use entities::{
    Acknowledgement, AppointmentRequest, Assessment, AssessmentRequest, Department, DocumentKind,
    MAX_SUPPLEMENTAL_CHARS, MedicationReminder, Service, SupportRequest, UploadedDocument,
};
pub use errors::{AssessmentError, DomainError};
pub use topics::{HealthTopic, TopicInfo};
