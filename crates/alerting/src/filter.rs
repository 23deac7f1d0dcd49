//! Filter Engine

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alert::Alert;
use crate::error::AlertError;

/// Filter criteria, combined with logical AND.
///
/// Omitted criteria impose no constraint. An empty string or a zero window
/// counts as omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive severity match
    #[serde(default)]
    pub severity: Option<String>,
    /// Case-insensitive service match
    #[serde(default)]
    pub service: Option<String>,
    /// Keep only alerts from the last N minutes
    #[serde(default)]
    pub recency_minutes: Option<u32>,
}

impl FilterCriteria {
    /// Criteria that keep everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_recency_minutes(mut self, minutes: u32) -> Self {
        self.recency_minutes = Some(minutes);
        self
    }

    /// Whether any criterion actually constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.severity().is_none() && self.service().is_none() && self.window().is_none()
    }

    fn severity(&self) -> Option<String> {
        self.severity
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn service(&self) -> Option<String> {
        self.service
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn window(&self) -> Option<Duration> {
        self.recency_minutes
            .filter(|&m| m > 0)
            .map(|m| Duration::minutes(i64::from(m)))
    }
}

/// Filter alerts against the current UTC instant
pub fn filter_alerts(
    alerts: &[Alert],
    criteria: &FilterCriteria,
) -> Result<Vec<Alert>, AlertError> {
    filter_alerts_at(alerts, criteria, Utc::now())
}

/// Filter alerts with an explicit "now" for the recency cutoff.
///
/// The cutoff is fixed for the whole pass. Relative order is preserved.
pub fn filter_alerts_at(
    alerts: &[Alert],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Result<Vec<Alert>, AlertError> {
    let severity = criteria.severity();
    let service = criteria.service();
    let cutoff = criteria.window().map(|window| now - window);

    let mut kept = Vec::new();
    for alert in alerts {
        if let Some(severity) = &severity {
            if alert.severity.to_lowercase() != *severity {
                continue;
            }
        }
        if let Some(service) = &service {
            if alert.service.to_lowercase() != *service {
                continue;
            }
        }
        // Timestamps are only parsed for alerts that survived the cheap checks
        if let Some(cutoff) = cutoff {
            if alert.parsed_time()? < cutoff {
                continue;
            }
        }
        kept.push(alert.clone());
    }

    debug!(
        "Filter {:?} kept {} of {} alerts",
        criteria,
        kept.len(),
        alerts.len()
    );
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::fixtures::{alert, at};
    use chrono::TimeZone;

    fn mixed() -> Vec<Alert> {
        vec![
            alert("a1", "critical", "payment-processor", "db", 95.0, 50.0),
            alert("a2", "warning", "auth-service", "cache", 70.0, 60.0),
            alert("a3", "info", "payment-processor", "api", 10.0, 10.0),
            alert("a4", "CRITICAL", "Payment-Processor", "api", 3.0, 1.0),
            alert("a5", "critical", "auth-service", "db", 99.0, 90.0),
        ]
    }

    fn ids(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let alerts = mixed();
        let kept = filter_alerts(&alerts, &FilterCriteria::new()).unwrap();
        assert_eq!(kept, alerts);
    }

    #[test]
    fn test_severity_case_insensitive() {
        let criteria = FilterCriteria::new().with_severity("Critical");
        let kept = filter_alerts(&mixed(), &criteria).unwrap();
        assert_eq!(ids(&kept), vec!["a1", "a4", "a5"]);
    }

    #[test]
    fn test_service_filter_idempotent() {
        let criteria = FilterCriteria::new().with_service("payment-processor");
        let once = filter_alerts(&mixed(), &criteria).unwrap();
        assert_eq!(ids(&once), vec!["a1", "a3", "a4"]);

        let twice = filter_alerts(&once, &criteria).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_combined_criteria() {
        let criteria = FilterCriteria::new()
            .with_severity("critical")
            .with_service("payment-processor");
        let kept = filter_alerts(&mixed(), &criteria).unwrap();
        assert_eq!(ids(&kept), vec!["a1", "a4"]);
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let criteria = FilterCriteria {
            severity: Some(String::new()),
            service: Some(String::new()),
            recency_minutes: Some(0),
        };
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_alerts(&mixed(), &criteria).unwrap().len(), 5);
    }

    #[test]
    fn test_recency_window() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let alerts = vec![
            at(alert("old", "info", "api", "db", 1.0, 1.0), "2024-01-15T10:30:00Z"),
            at(alert("edge", "info", "api", "db", 1.0, 1.0), "2024-01-15T11:00:00Z"),
            at(alert("new", "info", "api", "db", 1.0, 1.0), "2024-01-15T11:45:00+00:00"),
        ];
        let criteria = FilterCriteria::new().with_recency_minutes(60);
        let kept = filter_alerts_at(&alerts, &criteria, now).unwrap();
        assert_eq!(ids(&kept), vec!["edge", "new"]);
    }

    #[test]
    fn test_recency_accepts_short_iso_forms() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap();
        let alerts = vec![
            at(alert("minute", "info", "api", "db", 1.0, 1.0), "2024-01-15T10:30Z"),
            at(alert("colonless", "info", "api", "db", 1.0, 1.0), "2024-01-15T10:45:00+0000"),
            at(alert("basic", "info", "api", "db", 1.0, 1.0), "20240115T093000Z"),
        ];
        let criteria = FilterCriteria::new().with_recency_minutes(60);
        let kept = filter_alerts_at(&alerts, &criteria, now).unwrap();
        assert_eq!(ids(&kept), vec!["minute", "colonless"]);
    }

    #[test]
    fn test_recency_propagates_parse_error() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let alerts = vec![
            alert("ok", "info", "api", "db", 1.0, 1.0),
            at(alert("broken", "info", "api", "db", 1.0, 1.0), "not-a-time"),
        ];
        let criteria = FilterCriteria::new().with_recency_minutes(60);
        let err = filter_alerts_at(&alerts, &criteria, now).unwrap_err();
        assert!(matches!(err, AlertError::Parse { ref alert_id, .. } if alert_id == "broken"));
    }

    #[test]
    fn test_bad_timestamp_ignored_without_recency() {
        let alerts = vec![at(alert("broken", "info", "api", "db", 1.0, 1.0), "not-a-time")];
        let kept = filter_alerts(&alerts, &FilterCriteria::new().with_severity("info")).unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria::new().with_severity("critical");
        assert!(filter_alerts(&[], &criteria).unwrap().is_empty());
    }
}
