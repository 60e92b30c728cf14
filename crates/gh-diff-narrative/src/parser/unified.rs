//! Parse a single file's unified diff patch (as returned by the GitHub API).

use crate::model::DiffLine;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur during patch parsing.
///
/// Always scoped to the one file whose patch was being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParseError {
    #[error("Malformed hunk header on line {line}: {header}")]
    MalformedHunkHeader {
        /// 1-based physical line in the patch text.
        line: usize,
        header: String,
    },
    #[error("Line number overflow on line {line}")]
    LineNumberOverflow { line: usize },
}

/// A parsed `@@ -old_start,old_count +new_start,new_count @@ section` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in old version (1 when omitted).
    pub old_count: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in new version (1 when omitted).
    pub new_count: u32,
    /// Function context after the closing `@@`, trimmed (may be empty).
    pub section: String,
}

impl HunkHeader {
    /// Parse a hunk header line. Returns `None` if the line does not match
    /// the grammar or a number does not fit in `u32`.
    pub fn parse(line: &str) -> Option<Self> {
        static HUNK_REGEX: OnceLock<Regex> = OnceLock::new();

        let re = HUNK_REGEX.get_or_init(|| {
            Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
                .expect("hunk header regex is valid")
        });

        let captures = re.captures(line)?;
        let number = |idx: usize| -> Option<u32> {
            match captures.get(idx) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(1),
            }
        };

        Some(Self {
            old_start: number(1)?,
            old_count: number(2)?,
            new_start: number(3)?,
            new_count: number(4)?,
            section: captures
                .get(5)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        })
    }
}

/// Number of leading file-header lines to skip.
///
/// Only a real file header counts: a `diff --git` line (everything up to the
/// first hunk belongs to it: index, mode, rename and `Binary files` lines) or
/// a `--- ` line directly followed by a `+++ ` line. Anything else is patch
/// body and keeps its first-character meaning.
fn file_header_len(lines: &[&str]) -> usize {
    match lines {
        [first, ..] if first.starts_with("diff --git ") => lines
            .iter()
            .position(|l| l.starts_with("@@"))
            .unwrap_or(lines.len()),
        [old, new, ..] if old.starts_with("--- ") && new.starts_with("+++ ") => 2,
        _ => 0,
    }
}

/// Running state threaded through one parse.
///
/// Counters are held wider than `u32` so that overflow is reported on the
/// line that would need the out-of-range number, not on the one before it.
#[derive(Debug)]
struct ParserState {
    old_counter: u64,
    new_counter: u64,
    lines: Vec<DiffLine>,
}

impl ParserState {
    fn new() -> Self {
        Self {
            old_counter: 1,
            new_counter: 1,
            lines: Vec::new(),
        }
    }

    fn next_index(&self) -> usize {
        self.lines.len()
    }

    fn enter_hunk(&mut self, header: &HunkHeader, raw: &str) {
        self.old_counter = u64::from(header.old_start);
        self.new_counter = u64::from(header.new_start);
        let index = self.next_index();
        self.lines.push(DiffLine::hunk(raw, index));
    }

    fn take_old(&mut self, line: usize) -> Result<u32, ParseError> {
        let number =
            u32::try_from(self.old_counter).map_err(|_| ParseError::LineNumberOverflow { line })?;
        self.old_counter += 1;
        Ok(number)
    }

    fn take_new(&mut self, line: usize) -> Result<u32, ParseError> {
        let number =
            u32::try_from(self.new_counter).map_err(|_| ParseError::LineNumberOverflow { line })?;
        self.new_counter += 1;
        Ok(number)
    }

    fn push_added(&mut self, content: &str, line: usize) -> Result<(), ParseError> {
        let new_line = self.take_new(line)?;
        let index = self.next_index();
        self.lines.push(DiffLine::added(content, new_line, index));
        Ok(())
    }

    fn push_removed(&mut self, content: &str, line: usize) -> Result<(), ParseError> {
        let old_line = self.take_old(line)?;
        let index = self.next_index();
        self.lines.push(DiffLine::removed(content, old_line, index));
        Ok(())
    }

    fn push_context(&mut self, content: &str, line: usize) -> Result<(), ParseError> {
        let old_line = self.take_old(line)?;
        let new_line = self.take_new(line)?;
        let index = self.next_index();
        self.lines
            .push(DiffLine::context(content, old_line, new_line, index));
        Ok(())
    }
}

/// Parse one file's patch text into an ordered, line-numbered sequence.
///
/// Empty input yields an empty sequence. A malformed hunk header fails the
/// whole file with a [`ParseError`]; callers decide whether to skip it.
///
/// # Example
/// ```
/// use gh_diff_narrative::parser::parse_patch;
/// use gh_diff_narrative::LineKind;
///
/// let lines = parse_patch("@@ -1,2 +1,2 @@\n a\n-b\n+c").unwrap();
/// assert_eq!(lines.len(), 4);
/// assert_eq!(lines[2].kind, LineKind::Removed);
/// ```
pub fn parse_patch(patch: &str) -> Result<Vec<DiffLine>, ParseError> {
    let mut state = ParserState::new();
    let raw_lines: Vec<&str> = patch.lines().collect();
    let header_len = file_header_len(&raw_lines);

    for (idx, raw) in raw_lines.iter().copied().enumerate().skip(header_len) {
        let line_no = idx + 1;

        if raw.starts_with("@@") {
            let header = HunkHeader::parse(raw).ok_or_else(|| ParseError::MalformedHunkHeader {
                line: line_no,
                header: raw.to_string(),
            })?;
            state.enter_hunk(&header, raw);
            continue;
        }

        // "\ No newline at end of file"
        if raw.starts_with('\\') {
            continue;
        }

        if let Some(content) = raw.strip_prefix('+') {
            state.push_added(content, line_no)?;
        } else if let Some(content) = raw.strip_prefix('-') {
            state.push_removed(content, line_no)?;
        } else {
            let content = raw.strip_prefix(' ').unwrap_or(raw);
            state.push_context(content, line_no)?;
        }
    }

    Ok(state.lines)
}
