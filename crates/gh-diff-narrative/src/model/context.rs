//! Change contexts: one logical edit plus the lines around it.

use super::diff::DiffLine;
use serde::{Deserialize, Serialize};

/// Narrative significance of a change block, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

impl Importance {
    /// One sentence a narrator can lead with.
    pub fn narration_hint(&self) -> &'static str {
        match self {
            Importance::Critical => "Critical change that deserves a close look.",
            Importance::High => "Significant change worth explaining.",
            Importance::Medium => "Moderate change.",
            Importance::Low => "Minor change.",
        }
    }
}

/// A change block with its surrounding context lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeContext {
    /// Up to `context_size` context lines immediately before the change.
    pub before_context: Vec<DiffLine>,
    /// Added and removed lines of the block, never empty.
    pub change: Vec<DiffLine>,
    /// Up to `context_size` context lines immediately after the change.
    pub after_context: Vec<DiffLine>,
    /// Short human-readable description.
    pub summary: String,
    pub importance: Importance,
}

impl ChangeContext {
    /// Inclusive `(first, last)` `original_index` range covered by this context.
    pub fn span(&self) -> (usize, usize) {
        let first = self
            .before_context
            .first()
            .or_else(|| self.change.first())
            .map_or(0, |l| l.original_index);
        let last = self
            .after_context
            .last()
            .or_else(|| self.change.last())
            .map_or(first, |l| l.original_index);
        (first, last)
    }
}
