//! Diff data structures representing one changed file of a pull request.

use serde::{Deserialize, Serialize};

/// File status as reported by the GitHub "list pull request files" endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Removed,
    #[default]
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
}

/// One changed file as handed over by the fetching layer.
///
/// Field names follow the GitHub API payload so a `files` response can be
/// deserialized directly; unknown fields (`sha`, `blob_url`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInput {
    /// Path of the file after the change.
    pub filename: String,
    /// Change status.
    #[serde(default)]
    pub status: FileStatus,
    /// Unified diff patch. GitHub omits it for binary and oversized files.
    #[serde(default)]
    pub patch: Option<String>,
    /// Optional language hint; detected from the file extension when absent.
    #[serde(default)]
    pub language: Option<String>,
    /// Path before a rename.
    #[serde(default)]
    pub previous_filename: Option<String>,
}

impl FileInput {
    /// Create a modified-file input with the given patch.
    pub fn new(filename: impl Into<String>, patch: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: FileStatus::Modified,
            patch: Some(patch.into()),
            language: None,
            previous_filename: None,
        }
    }
}

/// A single line in the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// Line type.
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Line content (without leading +/-/space). Hunk lines keep the full header.
    pub content: String,
    /// Line number in old file (for Context and Removed).
    pub old_line_number: Option<u32>,
    /// Line number in new file (for Context and Added).
    pub new_line_number: Option<u32>,
    /// 0-based position in the parsed sequence of this file.
    pub original_index: usize,
}

impl DiffLine {
    /// Create a hunk header line.
    pub fn hunk(header: impl Into<String>, original_index: usize) -> Self {
        Self {
            kind: LineKind::Hunk,
            content: header.into(),
            old_line_number: None,
            new_line_number: None,
            original_index,
        }
    }

    /// Create a new context line.
    pub fn context(
        content: impl Into<String>,
        old_line: u32,
        new_line: u32,
        original_index: usize,
    ) -> Self {
        Self {
            kind: LineKind::Context,
            content: content.into(),
            old_line_number: Some(old_line),
            new_line_number: Some(new_line),
            original_index,
        }
    }

    /// Create a new added line.
    pub fn added(content: impl Into<String>, new_line: u32, original_index: usize) -> Self {
        Self {
            kind: LineKind::Added,
            content: content.into(),
            old_line_number: None,
            new_line_number: Some(new_line),
            original_index,
        }
    }

    /// Create a new removed line.
    pub fn removed(content: impl Into<String>, old_line: u32, original_index: usize) -> Self {
        Self {
            kind: LineKind::Removed,
            content: content.into(),
            old_line_number: Some(old_line),
            new_line_number: None,
            original_index,
        }
    }

    /// Whether this line is an addition or a removal.
    pub fn is_change(&self) -> bool {
        matches!(self.kind, LineKind::Added | LineKind::Removed)
    }

}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Added line (+).
    Added,
    /// Removed line (-).
    Removed,
    /// Unchanged line shown for orientation.
    Context,
    /// @@ header line.
    Hunk,
}

/// Line statistics for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
}

impl DiffStats {
    /// Count additions and deletions in a parsed line sequence.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let additions = lines.iter().filter(|l| l.kind == LineKind::Added).count();
        let deletions = lines.iter().filter(|l| l.kind == LineKind::Removed).count();
        Self {
            additions,
            deletions,
            changes: additions + deletions,
        }
    }
}

/// A parsed file diff, ready for rendering and narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDiff {
    /// Current file path (after rename if applicable).
    pub file_name: String,
    /// Previous file path (if renamed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_file_name: Option<String>,
    /// File status.
    #[serde(default)]
    pub status: FileStatus,
    /// Canonical language name used for tokenizing.
    pub language: String,
    /// Parsed lines in patch order.
    pub lines: Vec<DiffLine>,
    /// Line statistics derived from `lines`.
    pub stats: DiffStats,
}

impl ProcessedDiff {
    /// Build a processed diff; statistics are computed from `lines`.
    pub fn new(
        file_name: impl Into<String>,
        language: impl Into<String>,
        lines: Vec<DiffLine>,
    ) -> Self {
        let stats = DiffStats::from_lines(&lines);
        Self {
            file_name: file_name.into(),
            previous_file_name: None,
            status: FileStatus::Modified,
            language: language.into(),
            lines,
            stats,
        }
    }

    /// The "diff unavailable" stand-in used when a patch is missing or corrupt.
    pub fn unavailable(file_name: impl Into<String>, language: impl Into<String>) -> Self {
        Self::new(file_name, language, Vec::new())
    }

    /// Set status and previous name from the originating input.
    pub fn with_origin(mut self, status: FileStatus, previous_file_name: Option<String>) -> Self {
        self.status = status;
        self.previous_file_name = previous_file_name;
        self
    }

    /// Number of parsed lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the diff carries no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
