//! JSON Alert Loader
//!
//! Reads documents shaped `{"alerts": [ {...}, ... ]}`. Malformed entries are
//! skipped and counted; only document-level problems abort the load.

use alerting::{Alert, AlertBatch, AlertSource};
use metrics::counter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{LoadError, ValidationError};
use crate::validator::Validator;

/// An entry the validator refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Position in the `alerts` array
    pub index: usize,
    pub error: ValidationError,
}

/// Outcome of loading one document
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub alerts: Vec<Alert>,
    pub rejected: Vec<RejectedEntry>,
}

impl LoadReport {
    /// Drop per-entry detail, keeping the rejected count
    pub fn into_batch(self) -> AlertBatch {
        AlertBatch {
            rejected: self.rejected.len(),
            alerts: self.alerts,
        }
    }
}

/// Parse and validate an alert document
pub fn parse_document(text: &str) -> Result<LoadReport, LoadError> {
    let document: Value = serde_json::from_str(text)?;
    let entries = document
        .get("alerts")
        .and_then(Value::as_array)
        .ok_or(LoadError::InvalidStructure("missing 'alerts' array"))?;

    let validator = Validator::new();
    let mut report = LoadReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match validator.validate(entry) {
            Ok(alert) => report.alerts.push(alert),
            Err(error) => {
                warn!("Skipping invalid alert #{}: {}", index, error);
                report.rejected.push(RejectedEntry { index, error });
            }
        }
    }

    counter!("alerts_loaded_total").increment(report.alerts.len() as u64);
    counter!("alerts_rejected_total").increment(report.rejected.len() as u64);
    info!(
        "Loaded {} alerts ({} rejected)",
        report.alerts.len(),
        report.rejected.len()
    );

    Ok(report)
}

/// Alert source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load with per-entry rejection detail
    pub fn load_report(&self) -> Result<LoadReport, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::NotFound(self.path.clone()));
        }
        let text = fs::read_to_string(&self.path)?;
        parse_document(&text)
    }
}

impl AlertSource for JsonFileSource {
    type Error = LoadError;

    fn load(&self) -> Result<AlertBatch, LoadError> {
        self.load_report().map(LoadReport::into_batch)
    }
}

/// Alert source backed by an in-memory JSON document
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    text: String,
}

impl JsonStrSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AlertSource for JsonStrSource {
    type Error = LoadError;

    fn load(&self) -> Result<AlertBatch, LoadError> {
        parse_document(&self.text).map(LoadReport::into_batch)
    }
}
