//! Alert Triage - Main Entry Point

use tracing::info;
use triage_cli::{init_logging, run, TriageSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = TriageSettings::load()?;
    if let Some(path) = std::env::args().nth(1) {
        settings.alerts_path = path.into();
    }

    init_logging(&settings)?;
    info!("=== Alert Triage v{} ===", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run(&settings, &mut stdout.lock())?;

    Ok(())
}
