//! Appointment scheduling. Validates the booking form and acknowledges it; nothing is stored.

use crate::domain::{Acknowledgement, AppointmentRequest, DomainError};
use chrono::NaiveTime;
use tracing::info;

const MISSING_FIELDS: &str = "⚠️ Please fill in all required fields to book an appointment.";

pub struct AppointmentService;

impl AppointmentService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and acknowledge a booking.
    pub fn book(&self, request: &AppointmentRequest) -> Result<Acknowledgement, DomainError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }

        info!(department = %request.department, date = %request.date, "appointment accepted");

        Ok(Acknowledgement {
            headline: format!(
                "🎉 Appointment booked for {} with the {} department on {} at {}.",
                name,
                request.department,
                request.date.format("%B %d, %Y"),
                request.time.format("%I:%M %p")
            ),
            follow_up: "You will receive a confirmation email shortly.".to_string(),
        })
    }
}

impl Default for AppointmentService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a time of day. Accepts "14:30" and "2:30 PM".
pub fn parse_time(input: &str) -> Result<NaiveTime, DomainError> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&input.to_ascii_uppercase(), "%I:%M %p"))
        .map_err(|_| {
            DomainError::Validation(format!(
                "⚠️ Invalid time '{}'. Use HH:MM (e.g. 14:30) or HH:MM AM/PM.",
                input
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Department;
    use chrono::NaiveDate;

    fn request(name: &str) -> AppointmentRequest {
        AppointmentRequest {
            name: name.to_string(),
            department: Department::Cardiology,
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn booking_acknowledged() {
        let ack = AppointmentService::new().book(&request("Jane Doe")).unwrap();
        assert_eq!(
            ack.headline,
            "🎉 Appointment booked for Jane Doe with the Cardiology department on March 07, 2025 at 02:30 PM."
        );
        assert!(ack.follow_up.contains("confirmation email"));
    }

    #[test]
    fn blank_name_rejected() {
        let err = AppointmentService::new().book(&request("  ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn parses_both_time_formats() {
        let expected = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(parse_time("14:30").unwrap(), expected);
        assert_eq!(parse_time("2:30 PM").unwrap(), expected);
        assert_eq!(parse_time(" 02:30 pm ").unwrap(), expected);
        assert!(parse_time("half past two").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
