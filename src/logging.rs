//! Log setup. The terminal UI owns stdout, so logs go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::QuizError;

/// Send `tracing` output to `log_file`, filtered by `RUST_LOG` (default `info`).
pub fn init<P: AsRef<Path>>(log_file: P) -> Result<(), QuizError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file.as_ref())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    info!("{}", "=".repeat(60));
    info!("java-quiz {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
