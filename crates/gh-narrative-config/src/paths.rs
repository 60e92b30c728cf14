//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-pr-narrator/`, `~/.cache/gh-pr-narrator/`
//! - macOS: `~/Library/Application Support/gh-pr-narrator/`, `~/Library/Caches/gh-pr-narrator/`
//! - Windows: `%APPDATA%\gh-pr-narrator\`, `%LOCALAPPDATA%\gh-pr-narrator\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-pr-narrator";

/// Get the application cache directory (used for log files)
/// Returns ~/.cache/gh-pr-narrator/ on Linux, ~/Library/Caches/gh-pr-narrator/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the global config file
/// Returns ~/.config/gh-pr-narrator/config.toml on Linux. The file may not exist.
pub fn global_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join("config.toml"))
}
