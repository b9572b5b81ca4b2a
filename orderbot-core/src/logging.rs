// orderbot-core/src/logging.rs

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Logging;

/// `<dir>/bot_<unix-seconds>.log`
pub fn log_file_path(dir: &Path, unix_secs: i64) -> PathBuf {
    dir.join(format!("bot_{}.log", unix_secs))
}

/// Install console + per-run file logging. `RUST_LOG` beats the configured level.
///
/// Returns the path of the log file for this run.
pub fn init(settings: &Logging) -> Result<PathBuf> {
    let dir = Path::new(&settings.dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = log_file_path(dir, chrono::Utc::now().timestamp());
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level))
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    let stdout_layer = fmt::layer().with_target(false);
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
