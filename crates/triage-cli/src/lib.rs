//! Alert Triage CLI
//!
//! Loads a JSON alert batch and prints a triage report: a summary, filtered
//! views, origin groups and the overall incident priority.

use std::io::Write;
use std::str::FromStr;

use alert_loader::JsonFileSource;
use alerting::AlertProcessor;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
pub mod report;
mod settings;

pub use error::TriageError;
pub use settings::{LogFormat, ReportSettings, TriageSettings};

/// Initialize logging; logs go to stderr so the report owns stdout
pub fn init_logging(settings: &TriageSettings) -> Result<(), TriageError> {
    let level = Level::from_str(&settings.log_level)
        .map_err(|e| TriageError::Logging(format!("{}: {:?}", e, settings.log_level)))?;

    let result = match settings.log_format {
        LogFormat::Text => tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .with_max_level(level)
                .with_target(true)
                .with_writer(std::io::stderr)
                .finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            FmtSubscriber::builder()
                .json()
                .with_max_level(level)
                .with_target(true)
                .with_writer(std::io::stderr)
                .finish(),
        ),
    };

    result.map_err(|e| TriageError::Logging(e.to_string()))
}

/// Load the configured batch and write the triage report to `out`
pub fn run<W: Write>(settings: &TriageSettings, out: &mut W) -> Result<(), TriageError> {
    let source = JsonFileSource::new(&settings.alerts_path);
    info!("Loading alerts from {}", source.path().display());
    let processor = AlertProcessor::from_source(&source)?;

    if processor.is_empty() {
        writeln!(out, "No alerts loaded.")?;
        return Ok(());
    }

    let summary = processor.summarize(None)?;
    write!(out, "{}", report::render_summary(&summary, processor.rejected_count()))?;

    let by_severity = processor.filter(&settings.report.severity_criteria())?;
    let title = format!("{} Alerts", report::title_case(&settings.report.severity));
    write!(out, "{}", report::render_filtered(&title, &by_severity))?;

    let by_service = processor.filter(&settings.report.service_criteria())?;
    let title = format!("{} Alerts", report::title_case(&settings.report.service));
    write!(out, "{}", report::render_filtered(&title, &by_service))?;

    let groups = processor.group(None);
    write!(out, "{}", report::render_groups(&groups))?;

    let priority = processor.score(processor.alerts());
    write!(out, "{}", report::render_priority(priority))?;

    info!(
        "Report complete: {} alerts, {} groups, priority {:.1}",
        processor.alerts().len(),
        groups.len(),
        priority
    );
    Ok(())
}
