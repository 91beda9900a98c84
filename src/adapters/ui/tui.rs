//! Implements InputPort. Inquire-based interactive forms, one per service.

use crate::domain::{
    AppointmentRequest, AssessmentRequest, DomainError, MedicationReminder, Service,
    SupportRequest, UploadedDocument,
};
use crate::ports::{DocumentExtractorPort, InputPort};
use crate::usecases::{
    AppointmentService, AssessmentService, DISCLAIMER, HealthInfoService, ReminderService,
    SupportService, check_upload_size, extract_supplemental, parse_time,
};
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{Confirm, DateSelect, InquireError, Select, Text};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("✚").with_fg(Color::LightGreen))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// How a single form flow ended, other than normally.
enum FlowError {
    /// Esc pressed: back to the menu.
    Cancelled,
    /// Ctrl-C: leave the app.
    Interrupted,
    Failed(DomainError),
}

impl From<InquireError> for FlowError {
    fn from(e: InquireError) -> Self {
        match e {
            InquireError::OperationCanceled => FlowError::Cancelled,
            InquireError::OperationInterrupted => FlowError::Interrupted,
            other => FlowError::Failed(DomainError::Ui(other.to_string())),
        }
    }
}

enum MenuItem {
    Service(Service),
    Exit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Service(s) => write!(f, "{}", s),
            MenuItem::Exit => f.write_str("Exit"),
        }
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    assessment: Arc<AssessmentService>,
    extractor: Arc<dyn DocumentExtractorPort>,
    appointments: AppointmentService,
    reminders: ReminderService,
    support: SupportService,
    health_info: HealthInfoService,
    max_upload_bytes: u64,
}

impl TuiInputPort {
    pub fn new(
        assessment: Arc<AssessmentService>,
        extractor: Arc<dyn DocumentExtractorPort>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            assessment,
            extractor,
            appointments: AppointmentService::new(),
            reminders: ReminderService::new(),
            support: SupportService::new(),
            health_info: HealthInfoService::new(),
            max_upload_bytes,
        }
    }

    async fn symptom_assessment(&self) -> Result<(), FlowError> {
        println!(
            "{}",
            "Provide your symptoms and how long they've lasted. The AI will return a preliminary insight (not a diagnosis)."
                .cyan()
        );
        let symptoms = Text::new("Describe your symptoms (e.g. 'fever, headache, body aches'):")
            .prompt()?;
        let duration = Text::new("Duration (e.g. '3 days', '1 week', 'since yesterday'):").prompt()?;

        if let Err(advisory) = AssessmentRequest::new(&symptoms, &duration, None).validate() {
            println!("{}", advisory.to_string().yellow());
            return Ok(());
        }

        let path = Text::new("Optional document (.pdf or .txt) path, blank to skip:").prompt()?;
        let supplemental = if path.trim().is_empty() {
            None
        } else {
            self.load_document(Path::new(path.trim())).await
        };

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Analyzing your symptoms...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let outcome = self.assessment.assess(&symptoms, &duration, supplemental).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(assessment) => {
                println!("\n{}\n", "✨ AI Assessment Result".bold());
                println!("{}\n", assessment.text);
                println!("{}\n", DISCLAIMER.yellow());
            }
            Err(e) if e.is_missing_input() => println!("{}", e.to_string().yellow()),
            Err(e) => println!("{}", e.to_string().red()),
        }
        Ok(())
    }

    /// Read and extract an uploaded document. Any failure means "no supplemental text".
    async fn load_document(&self, path: &Path) -> Option<String> {
        match self.read_and_extract(path).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "document skipped");
                println!("{}", format!("⚠️ {}. Continuing without it.", e).yellow());
                None
            }
        }
    }

    async fn read_and_extract(&self, path: &Path) -> Result<String, DomainError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| DomainError::Extraction(format!("could not read {}: {}", path.display(), e)))?;
        check_upload_size(meta.len(), self.max_upload_bytes)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::Extraction(format!("could not read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let document = UploadedDocument::new(file_name, bytes);

        let extractor = Arc::clone(&self.extractor);
        let limit = self.max_upload_bytes;
        tokio::task::spawn_blocking(move || {
            extract_supplemental(&document, extractor.as_ref(), limit)
        })
        .await
        .map_err(|e| DomainError::Extraction(format!("extraction task failed: {}", e)))?
    }

    fn appointment(&self) -> Result<(), FlowError> {
        let name = Text::new("Full name:").prompt()?;
        let department = Select::new("Desired department:", crate::domain::Department::ALL.to_vec())
            .prompt()?;
        let date = DateSelect::new("Preferred date:")
            .with_min_date(chrono::Local::now().date_naive())
            .prompt()?;
        let time_input = Text::new("Preferred time (HH:MM or HH:MM AM/PM):")
            .with_validator(|s: &str| {
                Ok(match parse_time(s) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()?;
        let time = parse_time(&time_input).map_err(FlowError::Failed)?;
        let notes = Text::new("Additional notes (optional):").prompt()?;

        let request = AppointmentRequest {
            name,
            department,
            date,
            time,
            notes: Some(notes).filter(|n| !n.trim().is_empty()),
        };
        show_outcome(self.appointments.book(&request));
        Ok(())
    }

    fn medication_reminder(&self) -> Result<(), FlowError> {
        let medication = Text::new("Medication name (e.g. 'Aspirin'):").prompt()?;
        let dosage = Text::new("Dosage (e.g. '100mg', '2 pills'):").prompt()?;
        let times = Text::new("Reminder times (e.g. '9:00 AM, 6:00 PM' or 'Every 8 hours'):")
            .prompt()?;
        let start_date = DateSelect::new("Start date for reminders:").prompt()?;

        let reminder = MedicationReminder {
            medication,
            dosage,
            times,
            start_date,
        };
        show_outcome(self.reminders.set(&reminder));
        Ok(())
    }

    fn health_information(&self) -> Result<(), FlowError> {
        let topic = Select::new("Choose a health topic:", self.health_info.topics().to_vec())
            .prompt()?;
        let info = self.health_info.lookup(topic.name());

        println!("\n{}", info.title.bold());
        println!("{}\n", info.description.italic());
        println!("Key points:");
        for point in info.points {
            println!("  - {}", point);
        }
        println!();
        Ok(())
    }

    fn patient_support(&self) -> Result<(), FlowError> {
        println!(
            "{}",
            "Share your concerns or questions, and our wellness coach team will provide support and guidance."
                .cyan()
        );
        let full_name = Text::new("Your full name:").prompt()?;
        let email = Text::new("Your email address:").prompt()?;
        let concern = Text::new("Describe your concern or question:").prompt()?;
        let privacy_agreed = Confirm::new("I agree to share this information for support purposes.")
            .with_default(false)
            .prompt()?;

        let request = SupportRequest {
            full_name,
            email,
            concern,
            privacy_agreed,
        };
        show_outcome(self.support.submit(&request));
        Ok(())
    }
}

fn show_outcome(outcome: Result<crate::domain::Acknowledgement, DomainError>) {
    match outcome {
        Ok(ack) => {
            println!("\n{}", ack.headline.green());
            println!("{}\n", ack.follow_up);
        }
        Err(DomainError::Validation(msg)) => println!("{}", msg.yellow()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let mut items: Vec<MenuItem> = Service::ALL.into_iter().map(MenuItem::Service).collect();
            items.push(MenuItem::Exit);

            let choice = match Select::new("Choose a service", items).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            let service = match choice {
                MenuItem::Service(s) => s,
                MenuItem::Exit => break,
            };
            info!(service = %service, "service selected");

            let result = match service {
                Service::SymptomAssessment => self.symptom_assessment().await,
                Service::AppointmentScheduling => self.appointment(),
                Service::MedicationReminders => self.medication_reminder(),
                Service::HealthInformation => self.health_information(),
                Service::PatientSupport => self.patient_support(),
            };

            match result {
                Ok(()) | Err(FlowError::Cancelled) => continue,
                Err(FlowError::Interrupted) => break,
                Err(FlowError::Failed(e)) => return Err(e),
            }
        }

        println!(
            "{}",
            "For emergencies, always contact professional medical services directly.".dim()
        );
        Ok(())
    }
}
