//! Tracing subscriber setup.
//!
//! The terminal belongs to the renderer, so log output goes to a file. With
//! no log path nothing is installed and the `tracing` macros stay no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// `HANOI_DEBUG_LOG` values that force the `debug` level
pub fn debug_forced(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "TRUE" | "yes" | "YES"))
}

/// `debug` when forced, else `RUST_LOG`, else `info`
pub fn env_filter(force_debug: bool) -> EnvFilter {
    if force_debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install a file-backed fmt subscriber; returns whether one was installed.
pub fn init_logging(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let force = debug_forced(std::env::var("HANOI_DEBUG_LOG").ok().as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(force))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {}", e))?;
    Ok(true)
}
