//! Triage CLI Errors

use thiserror::Error;

/// Errors that stop a triage run
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Load(#[from] alert_loader::LoadError),

    #[error(transparent)]
    Alert(#[from] alerting::AlertError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
