//! Logging Infrastructure
//!
//! Console logging by default; daily rolling files when a log directory is set.

use std::path::Path;

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "foodbank-web";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Falls back to stdout when `log_dir` does not exist. Calling it twice is a
/// no-op for the second call.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.filter(|d| Path::new(d).is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}
