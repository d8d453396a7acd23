//! Subscriber setup for the binaries.
//!
//! Filters come from `RUST_LOG` and default to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file used by the terminal front-end, which cannot write to its own
/// screen.
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr, leaving stdout to the protocol.
pub fn init_stderr() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Append plain-text logs to `path`.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Log to the file named by `BLOCKFALL_LOG_PATH`, or not at all when unset.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(LOG_PATH_VAR) {
        Some(path) if !path.is_empty() => {
            init_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
