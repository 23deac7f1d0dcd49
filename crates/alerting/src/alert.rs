//! Alert Model

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// Offset-carrying layouts tried after RFC 3339, once `Z` is spelled `+00:00`.
/// `%z` takes the offset with or without a colon.
const OFFSET_LAYOUTS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
    "%Y%m%dT%H%M%S%z",
];

/// Offset-less layouts; read as UTC
const NAIVE_LAYOUTS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

/// A single metric observation that crossed its threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Opaque identifier
    pub id: String,
    /// ISO-8601 timestamp, UTC
    pub timestamp: String,
    /// Originating service
    pub service: String,
    /// Component within the service
    pub component: String,
    /// Severity label, usually one of the catalog labels
    pub severity: String,
    /// Metric name
    pub metric: String,
    /// Observed value
    pub value: f64,
    /// Threshold that was crossed
    pub threshold: f64,
    /// Human readable description
    pub description: String,
}

impl Alert {
    /// Parse the timestamp into an absolute instant.
    ///
    /// A trailing `Z` is the same as `+00:00`. Timestamps without an offset
    /// are taken to be UTC.
    pub fn parsed_time(&self) -> Result<DateTime<Utc>, AlertError> {
        let raw = self.timestamp.as_str();

        if raw.trim() != raw {
            return Err(self.parse_error("surrounding whitespace".to_string()));
        }

        let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
            Ok(instant) => return Ok(instant.with_timezone(&Utc)),
            Err(e) => e,
        };

        let zulu = raw.strip_suffix('Z').map(|rest| format!("{rest}+00:00"));
        let with_offset = zulu.as_deref().unwrap_or(raw);
        for layout in OFFSET_LAYOUTS {
            if let Ok(instant) = DateTime::parse_from_str(with_offset, layout) {
                return Ok(instant.with_timezone(&Utc));
            }
        }

        for layout in NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
                return Ok(naive.and_utc());
            }
        }

        if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(midnight.and_utc());
        }

        Err(self.parse_error(rfc3339_err.to_string()))
    }

    fn parse_error(&self, reason: String) -> AlertError {
        AlertError::Parse {
            alert_id: self.id.clone(),
            timestamp: self.timestamp.clone(),
            reason,
        }
    }

    /// Signed percentage by which `value` exceeds `threshold`.
    ///
    /// Zero when the threshold is zero.
    pub fn deviation_percent(&self) -> f64 {
        if self.threshold == 0.0 {
            return 0.0;
        }
        ((self.value - self.threshold) / self.threshold) * 100.0
    }

    /// The (service, component) origin key
    pub fn origin(&self) -> (&str, &str) {
        (&self.service, &self.component)
    }
}
