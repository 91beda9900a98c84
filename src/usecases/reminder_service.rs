//! Medication reminders. Validation and acknowledgement only; no notifications are scheduled.

use crate::domain::{Acknowledgement, DomainError, MedicationReminder};
use tracing::info;

const MISSING_FIELDS: &str = "⚠️ Please fill in all fields to set a medication reminder.";

pub struct ReminderService;

impl ReminderService {
    pub fn new() -> Self {
        Self
    }

    pub fn set(&self, reminder: &MedicationReminder) -> Result<Acknowledgement, DomainError> {
        let medication = reminder.medication.trim();
        let dosage = reminder.dosage.trim();
        let times = reminder.times.trim();
        if medication.is_empty() || dosage.is_empty() || times.is_empty() {
            return Err(DomainError::Validation(MISSING_FIELDS.to_string()));
        }

        info!(start = %reminder.start_date, "medication reminder accepted");

        Ok(Acknowledgement {
            headline: format!(
                "✅ Reminder set for {} ({}) starting {} at: {}.",
                medication,
                dosage,
                reminder.start_date.format("%B %d, %Y"),
                times
            ),
            follow_up: "You will receive notifications at the specified times.".to_string(),
        })
    }
}

impl Default for ReminderService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reminder(dosage: &str) -> MedicationReminder {
        MedicationReminder {
            medication: "Aspirin".into(),
            dosage: dosage.into(),
            times: "9:00 AM, 6:00 PM".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn reminder_acknowledged() {
        let ack = ReminderService::new().set(&reminder("100mg")).unwrap();
        assert_eq!(
            ack.headline,
            "✅ Reminder set for Aspirin (100mg) starting January 15, 2025 at: 9:00 AM, 6:00 PM."
        );
    }

    #[test]
    fn missing_dosage_rejected() {
        let err = ReminderService::new().set(&reminder("")).unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }
}
