//! Alert Processing Error Types

use thiserror::Error;

/// Errors raised by the alert processing core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlertError {
    /// Timestamp is not a valid ISO-8601 instant
    #[error("Alert {alert_id}: invalid timestamp {timestamp:?}: {reason}")]
    Parse {
        alert_id: String,
        timestamp: String,
        reason: String,
    },
}
