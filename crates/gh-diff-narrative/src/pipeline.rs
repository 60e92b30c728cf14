//! Per-file driver tying parser, extractor and scheduler together.

use crate::context::{extract_contexts, DEFAULT_CONTEXT_SIZE};
use crate::highlight::resolve_language;
use crate::model::{ChangeContext, FileInput, ProcessedDiff, WalkthroughStep};
use crate::parser::{parse_patch, ParseError};
use crate::schedule::schedule;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default walkthrough budget per file.
pub const DEFAULT_TOTAL_DURATION: u32 = 60;

/// Knobs for processing a batch of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeOptions {
    /// Context lines on each side of a change block.
    pub context_size: usize,
    /// Walkthrough budget for each file.
    pub total_duration: u32,
    /// Extension → language name, consulted before the built-in table.
    pub language_overrides: BTreeMap<String, String>,
    /// Explicit narration steps by file name; these replace the generated schedule.
    pub explicit_steps: BTreeMap<String, Vec<WalkthroughStep>>,
}

impl Default for NarrativeOptions {
    fn default() -> Self {
        Self {
            context_size: DEFAULT_CONTEXT_SIZE,
            total_duration: DEFAULT_TOTAL_DURATION,
            language_overrides: BTreeMap::new(),
            explicit_steps: BTreeMap::new(),
        }
    }
}

/// Everything produced for one successfully parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNarrative {
    pub diff: ProcessedDiff,
    pub contexts: Vec<ChangeContext>,
    pub steps: Vec<WalkthroughStep>,
}

/// Tagged per-file result, so one bad patch never sinks a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FileOutcome {
    Processed(FileNarrative),
    #[serde(rename_all = "camelCase")]
    Failed {
        file_name: String,
        error: ParseError,
        message: String,
        /// "Diff unavailable" stand-in the caller may render instead.
        fallback: ProcessedDiff,
    },
}

impl FileOutcome {
    pub fn file_name(&self) -> &str {
        match self {
            FileOutcome::Processed(narrative) => &narrative.diff.file_name,
            FileOutcome::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

fn language_for(input: &FileInput, options: &NarrativeOptions) -> &'static str {
    resolve_language(
        input.language.as_deref(),
        &input.filename,
        &options.language_overrides,
    )
    .name
}

/// Parse, extract and schedule one file.
pub fn process_file(
    input: &FileInput,
    options: &NarrativeOptions,
) -> Result<FileNarrative, ParseError> {
    let language = language_for(input, options);

    let lines = match input.patch.as_deref() {
        Some(patch) => parse_patch(patch)?,
        None => {
            log::warn!(
                "No patch for {} ({:?}), treating as empty diff",
                input.filename,
                input.status
            );
            Vec::new()
        }
    };

    let diff = ProcessedDiff::new(&input.filename, language, lines)
        .with_origin(input.status, input.previous_filename.clone());
    let contexts = extract_contexts(&diff.lines, options.context_size);
    let steps = schedule(
        &contexts,
        diff.line_count(),
        options.total_duration,
        options.explicit_steps.get(&input.filename).map(Vec::as_slice),
    );

    log::debug!(
        "Processed {}: {} lines, +{}/-{}, {} contexts, {} steps",
        diff.file_name,
        diff.line_count(),
        diff.stats.additions,
        diff.stats.deletions,
        contexts.len(),
        steps.len()
    );

    Ok(FileNarrative {
        diff,
        contexts,
        steps,
    })
}

/// Like [`process_file`], but folds a parse failure into [`FileOutcome::Failed`].
pub fn process_outcome(input: &FileInput, options: &NarrativeOptions) -> FileOutcome {
    match process_file(input, options) {
        Ok(narrative) => FileOutcome::Processed(narrative),
        Err(error) => {
            log::warn!("Skipping {}: {}", input.filename, error);
            FileOutcome::Failed {
                file_name: input.filename.clone(),
                message: error.to_string(),
                error,
                fallback: ProcessedDiff::unavailable(&input.filename, language_for(input, options))
                    .with_origin(input.status, input.previous_filename.clone()),
            }
        }
    }
}

/// Process files sequentially, preserving input order.
pub fn process_files(inputs: &[FileInput], options: &NarrativeOptions) -> Vec<FileOutcome> {
    inputs
        .iter()
        .map(|input| process_outcome(input, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileStatus, FocusType};
    use pretty_assertions::assert_eq;

    const RUST_PATCH: &str = "@@ -1,3 +1,4 @@ fn main()\n fn main() {\n-    run();\n+    run()?;\n+    Ok(())\n }";

    #[test]
    fn test_process_file() {
        let input = FileInput::new("src/main.rs", RUST_PATCH);
        let narrative = process_file(&input, &NarrativeOptions::default()).unwrap();

        assert_eq!(narrative.diff.language, "rust");
        assert_eq!(narrative.diff.stats.additions, 2);
        assert_eq!(narrative.diff.stats.deletions, 1);
        assert_eq!(narrative.diff.stats.changes, 3);
        assert_eq!(narrative.contexts.len(), 1);
        assert_eq!(narrative.steps.len(), 1);
        assert_eq!(narrative.steps[0].duration, DEFAULT_TOTAL_DURATION);
        assert_eq!(narrative.steps[0].end_line, 5);
    }

    #[test]
    fn test_language_hint_wins() {
        let input = FileInput {
            language: Some("py".to_string()),
            ..FileInput::new("script", "@@ -1 +1 @@\n-a\n+b")
        };
        let narrative = process_file(&input, &NarrativeOptions::default()).unwrap();
        assert_eq!(narrative.diff.language, "python");
    }

    #[test]
    fn test_missing_patch_is_empty_diff() {
        let input = FileInput {
            filename: "assets/logo.png".to_string(),
            status: FileStatus::Added,
            patch: None,
            language: None,
            previous_filename: None,
        };
        let narrative = process_file(&input, &NarrativeOptions::default()).unwrap();
        assert!(narrative.diff.is_empty());
        assert!(narrative.contexts.is_empty());
        assert_eq!(narrative.steps.len(), 1);
        assert_eq!(narrative.steps[0].focus_type, FocusType::Callout);
    }

    #[test]
    fn test_explicit_steps_by_file() {
        let step = WalkthroughStep {
            start_line: 0,
            end_line: 2,
            title: "Intro".to_string(),
            description: "Scripted".to_string(),
            focus_type: FocusType::Zoom,
            duration: 12,
        };
        let mut options = NarrativeOptions::default();
        options
            .explicit_steps
            .insert("src/main.rs".to_string(), vec![step.clone()]);

        let narrative = process_file(&FileInput::new("src/main.rs", RUST_PATCH), &options).unwrap();
        assert_eq!(narrative.steps, vec![step]);
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let inputs = vec![
            FileInput::new("a.rs", RUST_PATCH),
            FileInput::new("b.rs", "@@ broken @@\n+x"),
            FileInput::new("c.rs", RUST_PATCH),
        ];
        let outcomes = process_files(&inputs, &NarrativeOptions::default());

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_failed());
        assert!(outcomes[1].is_failed());
        assert!(!outcomes[2].is_failed());
        assert_eq!(outcomes[1].file_name(), "b.rs");

        match &outcomes[1] {
            FileOutcome::Failed {
                error, fallback, ..
            } => {
                assert!(matches!(error, ParseError::MalformedHunkHeader { line: 1, .. }));
                assert!(fallback.is_empty());
                assert_eq!(fallback.language, "rust");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let outcome = process_outcome(
            &FileInput::new("b.rs", "@@ broken @@"),
            &NarrativeOptions::default(),
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["fileName"], "b.rs");
        assert_eq!(json["error"]["kind"], "malformedHunkHeader");

        let ok = process_outcome(&FileInput::new("a.rs", RUST_PATCH), &NarrativeOptions::default());
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["outcome"], "processed");
        assert_eq!(json["diff"]["fileName"], "a.rs");
        assert_eq!(json["steps"][0]["focusType"], "highlight");
    }
}
