//! Console report rendering

use alerting::{Alert, AlertGroup, Summary};
use std::collections::BTreeMap;
use std::fmt::Write;

/// "payment-processor" -> "Payment Processor"
pub fn title_case(label: &str) -> String {
    label
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A titled list of alerts, one line each
pub fn render_filtered(title: &str, alerts: &[Alert]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}: {} alerts", title, alerts.len());
    for alert in alerts {
        let _ = writeln!(
            out,
            "  {}: {} - {}/{} - {}={}",
            alert.id,
            alert.severity,
            alert.service,
            alert.component,
            alert.metric,
            number(alert.value)
        );
    }
    out
}

/// Groups with their member alerts
pub fn render_groups(groups: &[AlertGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nAlert Groups: {} groups", groups.len());
    for group in groups {
        let _ = writeln!(
            out,
            "  {}/{}: {} alerts",
            group.service, group.component, group.total_alerts
        );
        for alert in &group.alerts {
            let _ = writeln!(
                out,
                "    {}: {} - {}={}",
                alert.id,
                alert.severity,
                alert.metric,
                number(alert.value)
            );
        }
    }
    out
}

/// Batch totals and distributions
pub fn render_summary(summary: &Summary, rejected: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "Loaded {} alerts", summary.total_alerts);
    if rejected > 0 {
        let _ = write!(out, " ({} rejected)", rejected);
    }
    out.push('\n');

    if let Some(breakdown) = &summary.breakdown {
        let _ = writeln!(out, "Severity: {}", distribution(&breakdown.severity_distribution));
        let _ = writeln!(out, "Services: {}", distribution(&breakdown.service_distribution));
        let _ = writeln!(
            out,
            "Components: {}",
            distribution(&breakdown.component_distribution)
        );
        let _ = writeln!(
            out,
            "Time range: {} .. {}",
            breakdown.time_range.earliest.to_rfc3339(),
            breakdown.time_range.latest.to_rfc3339()
        );
    }
    out
}

pub fn render_priority(score: f64) -> String {
    format!("\nOverall Priority: {:.1}\n", score)
}

/// Whole numbers keep one decimal place: `95.0`, not `95`
fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn distribution(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{}={}", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}
