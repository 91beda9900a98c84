//! Application configuration. Provider selection, credentials, limits.

use crate::adapters::ai::gemini_adapter::{DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL};
use crate::adapters::ai::openai_adapter::{DEFAULT_OPENAI_API_URL, DEFAULT_OPENAI_MODEL};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default cap on uploaded document size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Default sampling temperature for assessments.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

/// Which text-generation backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
    Mock,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "openai" | "ollama" => Ok(ProviderKind::OpenAi),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(format!(
                "unknown AI provider '{}' (expected gemini, openai or mock)",
                other
            )),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Mock => "mock",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// "gemini", "openai" or "mock". Read from HEALTH_DESK_AI_PROVIDER.
    #[serde(default)]
    pub ai_provider: Option<String>,

    /// Provider API key. Read from HEALTH_DESK_AI_API_KEY, falling back to
    /// GEMINI_API_KEY / OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Base URL (Gemini) or chat-completions endpoint (OpenAI). Read from HEALTH_DESK_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from HEALTH_DESK_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Sampling temperature. Read from HEALTH_DESK_AI_TEMPERATURE.
    #[serde(default)]
    pub ai_temperature: Option<f32>,

    /// Optional HTTP timeout for provider calls. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Maximum accepted size of an uploaded document. Read from HEALTH_DESK_MAX_UPLOAD_BYTES.
    #[serde(default)]
    pub max_upload_bytes: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("HEALTH_DESK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("HEALTH_DESK").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the API key from config or the provider-specific env var.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .filter(|k| is_usable_key(k))
            .or_else(|| match self.provider_kind().ok()? {
                ProviderKind::Gemini => env_key("GEMINI_API_KEY"),
                ProviderKind::OpenAi => env_key("OPENAI_API_KEY"),
                ProviderKind::Mock => None,
            })
    }

    /// Configured provider. Without an explicit choice: Gemini if a key is
    /// present (config or GEMINI_API_KEY), otherwise the mock.
    pub fn provider_kind(&self) -> Result<ProviderKind, String> {
        match self.ai_provider.as_deref() {
            Some(p) => p.parse(),
            None => {
                let has_key = self.ai_api_key.as_deref().is_some_and(is_usable_key)
                    || env_key("GEMINI_API_KEY").is_some();
                Ok(if has_key {
                    ProviderKind::Gemini
                } else {
                    ProviderKind::Mock
                })
            }
        }
    }

    /// Returns the API URL. Defaults depend on the provider.
    pub fn ai_api_url_or_default(&self, kind: ProviderKind) -> String {
        self.ai_api_url.clone().unwrap_or_else(|| match kind {
            ProviderKind::OpenAi => DEFAULT_OPENAI_API_URL.to_string(),
            _ => DEFAULT_GEMINI_API_URL.to_string(),
        })
    }

    /// Returns the model name. Defaults: "gemini-1.5-flash" / "gpt-4o-mini".
    pub fn ai_model_or_default(&self, kind: ProviderKind) -> String {
        self.ai_model.clone().unwrap_or_else(|| match kind {
            ProviderKind::OpenAi => DEFAULT_OPENAI_MODEL.to_string(),
            _ => DEFAULT_GEMINI_MODEL.to_string(),
        })
    }

    /// Returns the sampling temperature. Defaults to 0.6.
    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    pub fn max_upload_bytes_or_default(&self) -> u64 {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// A key set to an empty or whitespace-only value counts as unset.
fn is_usable_key(key: &str) -> bool {
    !key.trim().is_empty()
}

fn env_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|k| is_usable_key(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_names() {
        assert_eq!("Gemini".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert_eq!("ollama".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
        assert_eq!(" mock ".parse::<ProviderKind>(), Ok(ProviderKind::Mock));
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn explicit_provider_wins() {
        let cfg = AppConfig {
            ai_provider: Some("openai".into()),
            ..Default::default()
        };
        assert_eq!(cfg.provider_kind(), Ok(ProviderKind::OpenAi));
        assert_eq!(
            cfg.ai_api_url_or_default(ProviderKind::OpenAi),
            DEFAULT_OPENAI_API_URL
        );
        assert_eq!(cfg.ai_model_or_default(ProviderKind::OpenAi), "gpt-4o-mini");
    }

    #[test]
    fn configured_key_selects_gemini() {
        let cfg = AppConfig {
            ai_api_key: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(cfg.provider_kind(), Ok(ProviderKind::Gemini));
        assert_eq!(cfg.ai_api_key().as_deref(), Some("abc"));
        assert_eq!(cfg.ai_model_or_default(ProviderKind::Gemini), "gemini-1.5-flash");
    }

    #[test]
    fn blank_keys_are_unusable() {
        assert!(!is_usable_key(""));
        assert!(!is_usable_key("  \n"));
        assert!(is_usable_key("AIza-test"));
        assert_eq!(env_key("HEALTH_DESK_TEST_SURELY_UNSET_KEY"), None);
    }

    #[test]
    fn blank_configured_key_falls_back_to_mock() {
        let cfg = AppConfig {
            ai_api_key: Some("   ".into()),
            ..Default::default()
        };
        if env_key("GEMINI_API_KEY").is_none() {
            assert_eq!(cfg.provider_kind(), Ok(ProviderKind::Mock));
            assert_eq!(cfg.ai_api_key(), None);
        }
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ai_temperature_or_default(), DEFAULT_TEMPERATURE);
        assert_eq!(cfg.request_timeout(), None);
        assert_eq!(cfg.max_upload_bytes_or_default(), DEFAULT_MAX_UPLOAD_BYTES);

        let cfg = AppConfig {
            request_timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(30)));
    }
}
