//! Logging using simplelog
//!
//! Logs go to stderr by default so stdout stays clean for JSON output.
//! With `--log-file` they are written to a timestamped file in the cache
//! directory (~/.cache/gh-pr-narrator/ on Linux).

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Where log records end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Map a `RUST_LOG` value to a level filter, defaulting to info
fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("narrator-{}.log", timestamp)
}

fn log_file_path() -> Result<PathBuf> {
    Ok(gh_narrative_config::cache_dir()?.join(log_file_name()))
}

/// Initialize logging
///
/// Returns the log file path when logging to a file.
pub fn init(target: LogTarget) -> Result<Option<PathBuf>> {
    let level = parse_level(std::env::var("RUST_LOG").ok().as_deref());

    // Configure simplelog with timestamps
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    match target {
        LogTarget::Stderr => {
            TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
                .context("Failed to initialize logger")?;
            Ok(None)
        }
        LogTarget::File => {
            let path = log_file_path()?;
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, config, file).context("Failed to initialize logger")?;
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" warn ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("narrator-"));
        assert!(name.ends_with(".log"));
    }
}
