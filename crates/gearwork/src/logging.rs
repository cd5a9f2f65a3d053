//! File logging. The terminal belongs to the UI, so logs go to
//! `gearwork.log` in the platform data directory.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "gearwork.log";

/// Install the global subscriber. Filter comes from `RUST_LOG`.
///
/// Returns the log path, or `None` when no log file could be opened; the
/// clock runs fine without logging.
pub fn init() -> Option<PathBuf> {
    let dir = ProjectDirs::from("", "", "gearwork")?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path).ok()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gearwork=info".into()))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .ok()?;

    Some(path)
}
