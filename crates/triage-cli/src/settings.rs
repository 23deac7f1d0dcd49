//! Triage settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file, then `TRIAGE_*` environment variables (`__` separates
//! nested keys, e.g. `TRIAGE_REPORT__SERVICE`).

use alerting::FilterCriteria;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings file looked up when `TRIAGE_CONFIG` is unset
const DEFAULT_SETTINGS_FILE: &str = "triage";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Top-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageSettings {
    /// Alert batch to load
    #[serde(default = "default_alerts_path")]
    pub alerts_path: PathBuf,
    /// Maximum log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Views printed by the report
    #[serde(default)]
    pub report: ReportSettings,
}

/// Which filtered views the report prints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_severity")]
    pub severity: String,
    #[serde(default = "default_service")]
    pub service: String,
    /// Restrict both views to the last N minutes
    #[serde(default)]
    pub recency_minutes: Option<u32>,
}

fn default_alerts_path() -> PathBuf {
    PathBuf::from("sample_alerts.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_severity() -> String {
    "critical".to_string()
}

fn default_service() -> String {
    "payment-processor".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            severity: default_severity(),
            service: default_service(),
            recency_minutes: None,
        }
    }
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            alerts_path: default_alerts_path(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            report: ReportSettings::default(),
        }
    }
}

impl ReportSettings {
    /// Criteria for the severity view
    pub fn severity_criteria(&self) -> FilterCriteria {
        self.with_recency(FilterCriteria::new().with_severity(&self.severity))
    }

    /// Criteria for the service view
    pub fn service_criteria(&self) -> FilterCriteria {
        self.with_recency(FilterCriteria::new().with_service(&self.service))
    }

    fn with_recency(&self, criteria: FilterCriteria) -> FilterCriteria {
        match self.recency_minutes {
            Some(minutes) => criteria.with_recency_minutes(minutes),
            None => criteria,
        }
    }
}

impl TriageSettings {
    /// Load from `TRIAGE_CONFIG` (or `triage.*`) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("TRIAGE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string());
        Self::load_from(&file)
    }

    /// Load from a specific settings file (optional) and the environment
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("TRIAGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
