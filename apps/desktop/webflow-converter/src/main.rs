use webflow_converter::APP_DIR_NAME;
use webflow_converter::clipboard::SystemClipboard;
use webflow_converter::command::HELP_TEXT;
use webflow_converter::error::ConverterError;
use webflow_converter::logger::initialize as LoggerInitialize;
use webflow_converter::shell;

use client_core::config::AppConfig;
use client_core::controller::{ConversionController, spawn_controller};
use client_core::conversion_client::ConversionClient;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::IsTerminal;
use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::{BufReader, stdin};

const LOG_SUBDIR: &str = "logs";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ConverterError> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let log_dir = app_dir(dirs::data_local_dir(), "data")?.join(LOG_SUBDIR);
    create_dir_all(&log_dir).map_err(|e| ConverterError::Converter {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Webflow converter starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = app_dir(dirs::config_dir(), "config")?;
    let mut config =
        AppConfig::load_or_create(&config_dir).map_err(|e| ConverterError::Config {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    config
        .apply_env_overrides()
        .map_err(|e| ConverterError::Config {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let client = ConversionClient::with_timeout(&config.service.base_url, config.request_timeout())
        .map_err(|e| ConverterError::Core {
            message: format!("Failed to build conversion client: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    info!("Conversion endpoint: {}", client.endpoint());

    let handle = spawn_controller(ConversionController::new(
        client,
        Arc::new(SystemClipboard::new()),
    ));

    let color = std::io::stdout().is_terminal();
    let renderer = shell::spawn_renderer(handle.subscribe(), config.ui.clone(), color);

    println!("{HELP_TEXT}");
    let result = shell::run(BufReader::new(stdin()), &handle, &config.ui, color).await;

    // Dropping the last handle stops the actor, which ends the renderer after
    // it has drawn the final state.
    drop(handle);
    if let Err(e) = renderer.await {
        warn!("Renderer task failed: {e}");
    }

    info!("Webflow converter exiting");
    result
}

/// `{base}/webflow-converter`, or an error naming which platform directory is missing.
#[track_caller]
fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf, ConverterError> {
    base.map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| ConverterError::Converter {
            message: format!("Failed to resolve platform {kind} directory"),
            location: ErrorLocation::from(Location::caller()),
        })
}
