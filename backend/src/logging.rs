//! Diagnostic log.
//!
//! One env_logger instance for the whole process, writing
//! `<timestamp> <LEVEL> <message>` lines to the configured log file in append
//! mode. Call sites use the `log` macros; [`shutdown`] flushes on exit.

use crate::config::AppConfig;
use chrono::Local;
use env_logger::{Builder, Env, Target, WriteStyle};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Installs the global logger at `info`, or at the level `RUST_LOG` names.
///
/// Falls back to stderr when the log file cannot be opened. A second call
/// leaves the first logger in place.
pub fn init(config: &AppConfig) {
    install(Builder::from_env(Env::default().default_filter_or("info")), config);
}

/// Installs the global logger at `level`, ignoring `RUST_LOG`.
pub fn init_at(config: &AppConfig, level: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter_level(level);
    install(builder, config);
}

fn install(mut builder: Builder, config: &AppConfig) {
    builder
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.args()
            )
        });

    match open_log_file(&config.log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!(
                "Could not open log file {}: {}; logging to stderr",
                config.log_file.display(),
                e
            );
        }
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {}", e);
    }
}

/// Flushes buffered log output.
pub fn shutdown() {
    log::logger().flush();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_appended_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("comparator.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
