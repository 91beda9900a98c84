//! Health information lookup over the static topic catalogue.

use crate::domain::{HealthTopic, TopicInfo};

pub struct HealthInfoService;

impl HealthInfoService {
    pub fn new() -> Self {
        Self
    }

    pub fn topics(&self) -> &'static [HealthTopic] {
        &HealthTopic::ALL
    }

    /// Topic info by name. Unknown names fall back to General Wellness.
    pub fn lookup(&self, name: &str) -> TopicInfo {
        HealthTopic::from_name(name)
            .unwrap_or(HealthTopic::GeneralWellness)
            .info()
    }
}

impl Default for HealthInfoService {
    fn default() -> Self {
        Self::new()
    }
}
