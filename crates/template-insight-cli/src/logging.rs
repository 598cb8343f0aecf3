//! Log file rotation and subscriber installation.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use template_insight_settings::{LogLevel, LoggerSettings};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotate, open the log file, and install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(settings: &LoggerSettings) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    if env_filter.is_none() && settings.level == LogLevel::Off {
        return Ok(());
    }

    rotate(&settings.file, settings.max_size, settings.max_files)
        .with_context(|| format!("rotate log file: {}", settings.file))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .with_context(|| format!("open log file: {}", settings.file))?;

    let filter =
        env_filter.unwrap_or_else(|| EnvFilter::new(settings.level.as_filter_directive()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("install log subscriber")?;
    Ok(())
}

/// Shift `path` to `path.1` (and older files up to `path.{max_files}`) once it
/// exceeds `max_size` bytes. With `max_files == 0` the file is just removed.
pub fn rotate(path: &Utf8Path, max_size: u64, max_files: u32) -> io::Result<()> {
    let len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };
    if len <= max_size {
        return Ok(());
    }
    if max_files == 0 {
        return fs::remove_file(path);
    }

    let numbered = |n: u32| Utf8PathBuf::from(format!("{path}.{n}"));

    let oldest = numbered(max_files);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for n in (1..max_files).rev() {
        let from = numbered(n);
        if from.exists() {
            fs::rename(&from, numbered(n + 1))?;
        }
    }
    fs::rename(path, numbered(1))
}
