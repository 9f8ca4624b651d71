//! Tracing setup. The interactive form owns the terminal, so its logs go to a file.

use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::cli::RunMode;

const APP_DIR: &str = "footprint-tui";
const LOG_FILE: &str = "footprint-tui.log";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

pub fn log_target(mode: RunMode) -> LogTarget {
    match mode {
        RunMode::Interactive => match dirs::cache_dir() {
            Some(dir) => LogTarget::File(dir.join(APP_DIR).join(LOG_FILE)),
            None => LogTarget::Discard,
        },
        RunMode::Prompt | RunMode::Report | RunMode::Json => LogTarget::Stderr,
    }
}

pub fn init_logging(mode: RunMode) {
    let default_level = "warn";
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new(default_level)),
    );

    let _ = match log_target(mode) {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let dir = path.parent().map(PathBuf::from).unwrap_or_default();
            match (std::fs::create_dir_all(&dir), path.file_name()) {
                (Ok(()), Some(file_name)) => {
                    let appender = tracing_appender::rolling::never(&dir, file_name);
                    builder.with_ansi(false).with_writer(appender).try_init()
                }
                _ => builder.with_writer(io::sink).try_init(),
            }
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    };
}
