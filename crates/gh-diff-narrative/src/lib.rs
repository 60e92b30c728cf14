//! # gh-diff-narrative
//!
//! Turns the per-file patches of a GitHub pull request into structured,
//! presentation-agnostic records that drive a narrated code walkthrough.
//!
//! ## Design Principles
//!
//! This crate is a pure transformation stage: it receives patch text and
//! returns data, without network access, rendering or shared state. This
//! enables:
//!
//! - Deterministic output (identical input gives identical records)
//! - Processing files on any number of threads without coordination
//! - Reuse behind any fetcher (GitHub API, `git diff`, fixtures)
//!
//! ## Pipeline
//!
//! ```text
//! patch text ─▶ parse_patch ─▶ [DiffLine] ─▶ extract_contexts ─▶ [ChangeContext]
//!                                                    │
//!                                                    ▼
//!                                     schedule ─▶ [WalkthroughStep]
//! ```
//!
//! [`tokenize`](highlight::tokenize) runs independently per line for
//! highlighting.
//!
//! ## Usage
//!
//! ```rust
//! use gh_diff_narrative::{process_file, FileInput, NarrativeOptions};
//!
//! let input = FileInput::new("src/lib.rs", "@@ -1,2 +1,2 @@\n fn a() {}\n-fn b() {}\n+fn c() {}");
//! let narrative = process_file(&input, &NarrativeOptions::default())?;
//!
//! assert_eq!(narrative.diff.stats.changes, 2);
//! assert_eq!(narrative.steps.iter().map(|s| s.duration).sum::<u32>(), 60);
//! # Ok::<(), gh_diff_narrative::ParseError>(())
//! ```

pub mod context;
pub mod highlight;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod schedule;
pub mod traits;

// Re-export commonly used types
pub use context::{extract_contexts, score_importance, DEFAULT_CONTEXT_SIZE};
pub use highlight::{tokenize, DiffHighlighter, LanguageSpec};
pub use model::{
    ChangeContext, DiffLine, DiffStats, FileInput, FileStatus, FocusType, Importance, LineKind,
    ProcessedDiff, SyntaxToken, TokenKind, TokenStyle, WalkthroughStep,
};
pub use parser::{parse_patch, ParseError};
pub use pipeline::{
    process_file, process_files, process_outcome, FileNarrative, FileOutcome, NarrativeOptions,
    DEFAULT_TOTAL_DURATION,
};
pub use schedule::schedule;
pub use traits::{DefaultPalette, TokenPalette};
