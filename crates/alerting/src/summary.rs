//! Summary Reporter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::alert::Alert;
use crate::error::AlertError;

/// Earliest and latest alert instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

/// Distribution counts over a non-empty batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub severity_distribution: BTreeMap<String, usize>,
    pub service_distribution: BTreeMap<String, usize>,
    pub component_distribution: BTreeMap<String, usize>,
    pub time_range: TimeRange,
}

/// Batch summary.
///
/// `breakdown` is `None` exactly when `total_alerts` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_alerts: usize,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl Summary {
    /// The empty-batch sentinel
    pub fn empty() -> Self {
        Self {
            total_alerts: 0,
            breakdown: None,
        }
    }
}

/// Summarize a batch of alerts.
///
/// Any unparsable timestamp fails the whole summary.
pub fn summarize(alerts: &[Alert]) -> Result<Summary, AlertError> {
    let Some(first) = alerts.first() else {
        return Ok(Summary::empty());
    };

    let mut severity_distribution = BTreeMap::new();
    let mut service_distribution = BTreeMap::new();
    let mut component_distribution = BTreeMap::new();

    let start = first.parsed_time()?;
    let mut time_range = TimeRange {
        earliest: start,
        latest: start,
    };

    for alert in alerts {
        *severity_distribution.entry(alert.severity.clone()).or_insert(0) += 1;
        *service_distribution.entry(alert.service.clone()).or_insert(0) += 1;
        *component_distribution.entry(alert.component.clone()).or_insert(0) += 1;

        let at = alert.parsed_time()?;
        time_range.earliest = time_range.earliest.min(at);
        time_range.latest = time_range.latest.max(at);
    }

    Ok(Summary {
        total_alerts: alerts.len(),
        breakdown: Some(Breakdown {
            severity_distribution,
            service_distribution,
            component_distribution,
            time_range,
        }),
    })
}
