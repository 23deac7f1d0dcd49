//! Grouping Engine
//!
//! Buckets alerts by their (service, component) origin.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::alert::Alert;

/// Alerts sharing one (service, component) origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertGroup {
    pub service: String,
    pub component: String,
    /// Alerts in the order they were encountered
    pub alerts: Vec<Alert>,
    /// Tally by raw severity string
    pub severity_counts: BTreeMap<String, usize>,
    /// Always equal to `alerts.len()`
    pub total_alerts: usize,
}

impl AlertGroup {
    /// Create an empty group for an origin
    pub fn new(service: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            component: component.into(),
            alerts: Vec::new(),
            severity_counts: BTreeMap::new(),
            total_alerts: 0,
        }
    }

    /// Append an alert and update the tallies.
    ///
    /// Unrecognized severities get a bucket of their own.
    pub fn add_alert(&mut self, alert: Alert) {
        *self.severity_counts.entry(alert.severity.clone()).or_insert(0) += 1;
        self.alerts.push(alert);
        self.total_alerts = self.alerts.len();
    }

    /// The (service, component) key of this group
    pub fn origin(&self) -> (&str, &str) {
        (&self.service, &self.component)
    }
}

/// Partition alerts into groups ordered by first appearance of each origin
pub fn group_alerts(alerts: &[Alert]) -> Vec<AlertGroup> {
    let mut groups: Vec<AlertGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for alert in alerts {
        let slot = *index.entry(alert.origin()).or_insert_with(|| {
            groups.push(AlertGroup::new(&alert.service, &alert.component));
            groups.len() - 1
        });
        groups[slot].add_alert(alert.clone());
    }

    debug!("Grouped {} alerts into {} groups", alerts.len(), groups.len());
    groups
}
