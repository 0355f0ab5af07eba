use std::io;

use anyhow::{Result, anyhow};
use sre_appointments::config::AppConfig;
use sre_appointments::console::{Driver, DriverOutcome};
use sre_appointments::handlers::booking::BookingService;
use sre_appointments::models::offices::OfficeDirectory;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_level)?;

    let offices = match &config.offices_file {
        Some(path) => OfficeDirectory::from_csv(path)?,
        None => OfficeDirectory::sonora(),
    };
    if offices.is_empty() {
        return Err(anyhow!("no offices available for booking"));
    }

    let mut service = BookingService::new(offices, config.booking_year);
    for kind in &config.sinks {
        service.register_boxed_sink(kind.build());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = Driver::new(&service, stdin.lock(), stdout.lock());

    match driver.run()? {
        DriverOutcome::Booked(record) => {
            info!(confirmation_code = record.confirmation_code(), "session booked")
        }
        DriverOutcome::Aborted(e) => info!("session ended without booking: {}", e),
        DriverOutcome::InputClosed => info!("session ended: input closed"),
    }

    Ok(())
}

// logs go to stderr so they never mix with the prompts
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
