//! Change context extraction and importance scoring.

mod extractor;
mod importance;

pub use extractor::{extract_contexts, DEFAULT_CONTEXT_SIZE};
pub use importance::{score_change, score_importance, ImportanceScore};
