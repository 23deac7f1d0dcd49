//! Alert Processing Engine
//!
//! Reduces a batch of monitoring alerts to triage-ready views:
//! - Filtering by severity, service and recency
//! - Grouping by (service, component) origin
//! - Weighted incident priority scoring
//! - Batch summaries

mod alert;
mod error;
mod filter;
mod group;
mod priority;
mod processor;
mod severity;
mod summary;

pub use alert::Alert;
pub use error::AlertError;
pub use filter::{filter_alerts, filter_alerts_at, FilterCriteria};
pub use group::{group_alerts, AlertGroup};
pub use priority::{
    affected_components, priority_score, PriorityBreakdown, BREADTH_FACTOR, DEVIATION_FACTOR,
    SEVERITY_FACTOR,
};
pub use processor::{AlertBatch, AlertProcessor, AlertSource};
pub use severity::SeverityLevel;
pub use summary::{summarize, Breakdown, Summary, TimeRange};
