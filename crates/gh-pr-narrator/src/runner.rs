//! Concurrent per-file processing
//!
//! Each file is processed on the tokio blocking pool; a semaphore bounds how
//! many run at once. Results are collected in input order. Highlighters are
//! pooled across files so their token cache is reused.

use anyhow::{Context, Result};
use gh_diff_narrative::{
    process_outcome, DiffHighlighter, FileInput, FileOutcome, NarrativeOptions, ProcessedDiff,
    SyntaxToken,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use crate::cli::RunSettings;

/// One file's entry in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    #[serde(flatten)]
    pub outcome: FileOutcome,
    /// Tokens per diff line, parallel to `diff.lines`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Vec<SyntaxToken>>>,
}

/// Report written for a whole pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationReport {
    pub files: usize,
    pub processed: usize,
    pub failed: usize,
    pub results: Vec<FileReport>,
}

impl NarrationReport {
    fn new(results: Vec<FileReport>) -> Self {
        let failed = results.iter().filter(|r| r.outcome.is_failed()).count();
        Self {
            files: results.len(),
            processed: results.len() - failed,
            failed,
            results,
        }
    }
}

/// Highlighters shared by the workers, so the token cache carries over
/// from one file to the next. Never holds more than one per worker.
#[derive(Debug, Default)]
struct HighlighterPool {
    idle: Mutex<Vec<DiffHighlighter>>,
}

impl HighlighterPool {
    fn highlight(&self, diff: &ProcessedDiff) -> Vec<Vec<SyntaxToken>> {
        let mut highlighter = self.take();
        let tokens = highlighter.highlight_diff(diff);
        log::trace!(
            "Highlighted {} ({} cached lines)",
            diff.file_name,
            highlighter.cache_size()
        );
        self.put(highlighter);
        tokens
    }

    fn take(&self) -> DiffHighlighter {
        self.idle
            .lock()
            .ok()
            .and_then(|mut idle| idle.pop())
            .unwrap_or_default()
    }

    fn put(&self, highlighter: DiffHighlighter) {
        if let Ok(mut idle) = self.idle.lock() {
            idle.push(highlighter);
        }
    }
}

fn report_file(
    input: &FileInput,
    options: &NarrativeOptions,
    highlighters: Option<&HighlighterPool>,
) -> FileReport {
    let outcome = process_outcome(input, options);
    let tokens = match (&outcome, highlighters) {
        (FileOutcome::Processed(narrative), Some(pool)) => Some(pool.highlight(&narrative.diff)),
        _ => None,
    };
    FileReport { outcome, tokens }
}

/// Process every file, at most `settings.workers` (at least one) at a time
pub async fn run(
    inputs: Vec<FileInput>,
    options: NarrativeOptions,
    settings: &RunSettings,
) -> Result<NarrationReport> {
    let workers = settings.workers.max(1);
    let options = Arc::new(options);
    let highlighters = settings
        .tokens
        .then(|| Arc::new(HighlighterPool::default()));
    let semaphore = Arc::new(Semaphore::new(workers));
    let mut handles = Vec::with_capacity(inputs.len());

    log::info!("Processing {} files with {} workers", inputs.len(), workers);

    for input in inputs {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("Worker pool closed")?;
        let options = Arc::clone(&options);
        let highlighters = highlighters.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let report = report_file(&input, &options, highlighters.as_deref());
            drop(permit);
            report
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.context("File worker panicked")?);
    }

    let report = NarrationReport::new(results);
    log::info!(
        "Processed {} files ({} failed)",
        report.files,
        report.failed
    );
    Ok(report)
}
