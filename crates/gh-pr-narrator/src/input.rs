//! Reading the changed-files payload and explicit steps

use anyhow::{Context, Result};
use gh_diff_narrative::{FileInput, WalkthroughStep};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Parse a JSON array of changed files
pub fn parse_files(json: &str) -> Result<Vec<FileInput>> {
    serde_json::from_str(json).context("Failed to parse changed files JSON")
}

/// Load changed files from a path, or stdin when none is given
pub fn load_files(path: Option<&Path>) -> Result<Vec<FileInput>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read changed files from stdin")?;
            buffer
        }
    };

    let files = parse_files(&content)?;
    log::info!("Loaded {} changed files", files.len());
    Ok(files)
}

/// Load the file name → steps map
pub fn load_steps(path: &Path) -> Result<BTreeMap<String, Vec<WalkthroughStep>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read steps file {}", path.display()))?;
    let steps: BTreeMap<String, Vec<WalkthroughStep>> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse steps file {}", path.display()))?;
    log::debug!("Loaded explicit steps for {} files", steps.len());
    Ok(steps)
}
