//! Application use cases. Orchestrate domain logic via ports.

pub mod appointment_service;
pub mod assessment_service;
pub mod document_intake;
pub mod health_info_service;
pub mod reminder_service;
pub mod support_service;

pub use appointment_service::{AppointmentService, parse_time};
pub use assessment_service::{ASSESSMENT_INSTRUCTIONS, AssessmentService, DISCLAIMER, build_prompt};
pub use document_intake::{check_upload_size, extract_supplemental};
pub use health_info_service::HealthInfoService;
pub use reminder_service::ReminderService;
pub use support_service::SupportService;
