//! Priority Scorer
//!
//! Combines three factors into a single incident priority:
//! - severity: sum of catalog weights
//! - deviation: mean absolute percentage deviation from threshold
//! - breadth: number of distinct (service, component) origins
//!
//! The factor weights are fixed policy. Changing them changes how incidents
//! rank against each other.

use std::collections::HashSet;
use tracing::debug;

use crate::alert::Alert;
use crate::severity::SeverityLevel;

/// Weight of the summed severity weights
pub const SEVERITY_FACTOR: f64 = 0.5;
/// Weight of the mean absolute deviation percentage
pub const DEVIATION_FACTOR: f64 = 0.3;
/// Weight of the affected origin count
pub const BREADTH_FACTOR: f64 = 0.2;

/// The individual factors behind a priority score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriorityBreakdown {
    pub severity_score: f64,
    pub avg_deviation: f64,
    pub affected_components: usize,
}

impl PriorityBreakdown {
    /// Compute the factors for a set of alerts
    pub fn compute(alerts: &[Alert]) -> Self {
        if alerts.is_empty() {
            return Self::default();
        }

        // Unknown labels contribute nothing
        let severity_score = total_weight(
            alerts
                .iter()
                .filter_map(|a| SeverityLevel::from_label(&a.severity))
                .map(SeverityLevel::weight),
        );

        let avg_deviation = alerts
            .iter()
            .map(|a| a.deviation_percent().abs())
            .sum::<f64>()
            / alerts.len() as f64;

        Self {
            severity_score: severity_score as f64,
            avg_deviation,
            affected_components: affected_components(alerts),
        }
    }

    /// Weighted score
    pub fn score(&self) -> f64 {
        SEVERITY_FACTOR * self.severity_score
            + DEVIATION_FACTOR * self.avg_deviation
            + BREADTH_FACTOR * self.affected_components as f64
    }
}

/// Priority score for a set of alerts; `0.0` when empty
pub fn priority_score(alerts: &[Alert]) -> f64 {
    if alerts.is_empty() {
        return 0.0;
    }
    let breakdown = PriorityBreakdown::compute(alerts);
    let score = breakdown.score();
    debug!("Priority {:.2} from {:?}", score, breakdown);
    score
}

/// Sum of severity weights, widened so large batches cannot overflow
fn total_weight(weights: impl Iterator<Item = u32>) -> u64 {
    weights.map(u64::from).sum()
}

/// Number of distinct (service, component) origins
pub fn affected_components(alerts: &[Alert]) -> usize {
    alerts.iter().map(Alert::origin).collect::<HashSet<_>>().len()
}
