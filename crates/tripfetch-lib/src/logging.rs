use crate::error::TripFetchError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file kept next to the downloaded data.
pub const LOG_FILE: &str = "tripfetch.log";

/// Wire the process-wide subscriber: one appending file writer and one
/// console echo on stderr. Called exactly once by the entry point; stdout is
/// left untouched so it can carry the resulting data file path.
pub fn init_logging(log_path: &Path, level: Level) -> Result<(), TripFetchError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false);
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|err| TripFetchError::LoggingInit {
            reason: err.to_string(),
        })?;

    Ok(())
}
