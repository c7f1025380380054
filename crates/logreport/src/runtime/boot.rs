//! Boot — logging init and config load.

use std::path::Path;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::conf::{LogFormat, ReportConfig};

/// Initialise the tracing / logging subsystem.
///
/// Logs always go to stderr; stdout is reserved for the report and the
/// skipped-line notices.
pub fn init_logging(config: &ReportConfig) {
    // Prefer RUST_LOG env var, fall back to config level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}

/// Load and validate configuration, then start logging.
pub fn boot(config_path: Option<&Path>) -> Result<ReportConfig> {
    let config = ReportConfig::load(config_path).context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_logging(&config);
    info!(
        "logreport v{} (output={})",
        env!("CARGO_PKG_VERSION"),
        config.output.format
    );

    Ok(config)
}
