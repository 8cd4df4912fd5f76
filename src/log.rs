// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::LOG_FILE;
use crate::error::{ExportError, Result};

/// Route `logf!`/`logd!`/`logw!`/`loge!` into `<store_dir>/debug.log`.
/// `RUST_LOG` wins over the `debug` switch when set.
pub fn init(store_dir: &Path, debug: bool) -> Result<()> {
    fs::create_dir_all(store_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store_dir.join(LOG_FILE))?;

    let default_level = if debug { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| ExportError::Logging(e.to_string()))
}
