//! Group parsed diff lines into change contexts.

use super::importance::score_importance;
use crate::model::{ChangeContext, DiffLine, DiffStats, LineKind};
use crate::parser::HunkHeader;
use std::ops::Range;

/// Context lines kept on each side of a change block by default.
pub const DEFAULT_CONTEXT_SIZE: usize = 3;

/// Extract change contexts from a parsed line sequence.
///
/// Runs of added/removed lines separated only by at most `2 * context_size`
/// context lines are merged into one block, so windows never overlap. The
/// result is ordered by the first changed line. A diff without changes
/// yields an empty vector.
pub fn extract_contexts(lines: &[DiffLine], context_size: usize) -> Vec<ChangeContext> {
    let runs = change_runs(lines);
    let blocks = merge_runs(lines, runs, context_size.saturating_mul(2));

    blocks
        .into_iter()
        .map(|block| build_context(lines, block, context_size))
        .collect()
}

/// Maximal runs of consecutive added/removed lines, as slice positions.
fn change_runs(lines: &[DiffLine]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;

    for (pos, line) in lines.iter().enumerate() {
        match (line.is_change(), start) {
            (true, None) => start = Some(pos),
            (false, Some(s)) => {
                runs.push(s..pos);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..lines.len());
    }

    runs
}

/// Merge runs whose gap is only context lines, at most `max_gap` of them.
fn merge_runs(lines: &[DiffLine], runs: Vec<Range<usize>>, max_gap: usize) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(runs.len());

    for run in runs {
        if let Some(last) = merged.last_mut() {
            let gap = &lines[last.end..run.start];
            if gap.len() <= max_gap && gap.iter().all(|l| l.kind == LineKind::Context) {
                last.end = run.end;
                continue;
            }
        }
        merged.push(run);
    }

    merged
}

fn build_context(lines: &[DiffLine], block: Range<usize>, context_size: usize) -> ChangeContext {
    let before_context = lines[..block.start]
        .iter()
        .rev()
        .take_while(|l| l.kind == LineKind::Context)
        .take(context_size)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let after_context = lines[block.end..]
        .iter()
        .take_while(|l| l.kind == LineKind::Context)
        .take(context_size)
        .cloned()
        .collect();

    let change: Vec<DiffLine> = lines[block.clone()]
        .iter()
        .filter(|l| l.is_change())
        .cloned()
        .collect();

    let heading = section_heading(lines, block.start);
    let summary = summarize(&change, heading.as_deref());
    let importance = score_importance(&change);

    ChangeContext {
        before_context,
        change,
        after_context,
        summary,
        importance,
    }
}

/// Section text of the nearest hunk header above `pos`, if any.
fn section_heading(lines: &[DiffLine], pos: usize) -> Option<String> {
    lines[..pos]
        .iter()
        .rev()
        .find(|l| l.kind == LineKind::Hunk)
        .and_then(|l| HunkHeader::parse(&l.content))
        .map(|h| h.section)
        .filter(|s| !s.is_empty())
}

fn plural_lines(count: usize) -> String {
    if count == 1 {
        "1 line".to_string()
    } else {
        format!("{} lines", count)
    }
}

/// e.g. "Added 3 lines", "Modified 4 lines (+3/-1) in fn main()".
fn summarize(change: &[DiffLine], heading: Option<&str>) -> String {
    let stats = DiffStats::from_lines(change);

    let what = match (stats.additions, stats.deletions) {
        (a, 0) => format!("Added {}", plural_lines(a)),
        (0, d) => format!("Removed {}", plural_lines(d)),
        (a, d) => format!("Modified {} (+{}/-{})", plural_lines(a + d), a, d),
    };

    match heading {
        Some(heading) => format!("{} in {}", what, heading),
        None => what,
    }
}
