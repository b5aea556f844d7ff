//! Review Pulse CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use revpulse::telemetry::{TelemetryEvent, sink_for};
use revpulse::{OperationMode, PulseConfig, PulseError, load_dataset};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PulseError> {
    let config = load_config()?;
    emit_load_telemetry(&config)?;

    match config.operation_mode() {
        OperationMode::Dashboard => cli::dashboard::run(&config).await,
        OperationMode::Summary => cli::summary::run(&config),
        OperationMode::Export => cli::export_report::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PulseError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PulseConfig, PulseError> {
    PulseConfig::load().map_err(|error| PulseError::Configuration {
        message: error.to_string(),
    })
}

/// Records the dataset-loaded event when telemetry is enabled.
///
/// Loading here is cheap: the loader caches by path, so the selected mode
/// reuses the same parsed dataset.
fn emit_load_telemetry(config: &PulseConfig) -> Result<(), PulseError> {
    if !config.telemetry {
        return Ok(());
    }

    let path = config.require_data_path()?;
    let dataset = load_dataset(&path)?;
    sink_for(true).record(TelemetryEvent::DatasetLoaded {
        path: path.into_string(),
        rows: dataset.len(),
    });
    Ok(())
}
