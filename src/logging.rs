//! Logging setup
//!
//! Log output goes to a file so it never interferes with terminal rendering.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;

/// Install the global subscriber writing to `config.log_file`.
///
/// The returned guard flushes pending lines on drop and must be held for the
/// lifetime of the program. Returns `None` if a subscriber is already set.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let path = config.log_file.as_path();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name()?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
