//! Timed narration steps.

use serde::{Deserialize, Serialize};

/// How the presentation layer should draw attention to a step's lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusType {
    #[default]
    Highlight,
    Zoom,
    Callout,
}

/// A scheduled unit of narration focused on a range of diff lines.
///
/// `start_line` and `end_line` are inclusive `original_index` positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkthroughStep {
    pub start_line: usize,
    pub end_line: usize,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub focus_type: FocusType,
    pub duration: u32,
}
