//! Alert Processor
//!
//! A processing session that owns one batch of alerts and exposes the
//! filter, grouping, scoring and summary passes over it. Every pass reads
//! the batch and returns new collections, so independent passes can run in
//! parallel over a shared `&AlertProcessor`.

use std::convert::Infallible;
use tracing::info;

use crate::alert::Alert;
use crate::error::AlertError;
use crate::filter::{filter_alerts, FilterCriteria};
use crate::group::{group_alerts, AlertGroup};
use crate::priority::{affected_components, priority_score};
use crate::summary::{summarize, Summary};

/// Validated alerts handed over by a loader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBatch {
    pub alerts: Vec<Alert>,
    /// Entries the loader rejected as malformed
    pub rejected: usize,
}

/// Anything that can produce a batch of validated alerts
pub trait AlertSource {
    type Error: std::error::Error;

    fn load(&self) -> Result<AlertBatch, Self::Error>;
}

impl AlertSource for Vec<Alert> {
    type Error = Infallible;

    fn load(&self) -> Result<AlertBatch, Infallible> {
        Ok(AlertBatch {
            alerts: self.clone(),
            rejected: 0,
        })
    }
}

/// Processing session over one alert batch
#[derive(Debug, Clone, Default)]
pub struct AlertProcessor {
    alerts: Vec<Alert>,
    rejected: usize,
}

impl AlertProcessor {
    /// Create a processor over an already loaded batch
    pub fn new(batch: AlertBatch) -> Self {
        info!(
            "Creating alert processor with {} alerts ({} rejected by loader)",
            batch.alerts.len(),
            batch.rejected
        );
        Self {
            alerts: batch.alerts,
            rejected: batch.rejected,
        }
    }

    /// Load a batch from a source and create a processor over it
    pub fn from_source<S: AlertSource>(source: &S) -> Result<Self, S::Error> {
        source.load().map(Self::new)
    }

    /// All alerts in the session
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Entries the loader skipped
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Filter the session's alerts
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<Alert>, AlertError> {
        filter_alerts(&self.alerts, criteria)
    }

    /// Group `alerts`, or the whole session when `None`
    pub fn group(&self, alerts: Option<&[Alert]>) -> Vec<AlertGroup> {
        group_alerts(alerts.unwrap_or(self.alerts.as_slice()))
    }

    /// Priority score of an arbitrary alert subset
    pub fn score(&self, alerts: &[Alert]) -> f64 {
        priority_score(alerts)
    }

    /// Summarize `alerts`, or the whole session when `None`
    pub fn summarize(&self, alerts: Option<&[Alert]>) -> Result<Summary, AlertError> {
        summarize(alerts.unwrap_or(self.alerts.as_slice()))
    }

    /// Distinct (service, component) origins in `alerts`
    pub fn affected_components(&self, alerts: &[Alert]) -> usize {
        affected_components(alerts)
    }
}
