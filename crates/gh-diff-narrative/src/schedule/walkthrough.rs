//! Time-budgeted walkthrough scheduling.

use crate::model::{ChangeContext, FocusType, Importance, WalkthroughStep};

/// Build the narration schedule for one file.
///
/// * Non-empty `explicit_steps` are returned unchanged.
/// * No contexts: one overview step spanning every line, taking the whole budget.
/// * Otherwise one step per context. The budget is split evenly with floor
///   division and the remainder goes to the last step, so durations always
///   sum to `total_duration`.
///
/// `line_count` is the number of parsed lines of the file; step ranges are
/// `original_index` positions clamped to `0..line_count`.
pub fn schedule(
    contexts: &[ChangeContext],
    line_count: usize,
    total_duration: u32,
    explicit_steps: Option<&[WalkthroughStep]>,
) -> Vec<WalkthroughStep> {
    if let Some(steps) = explicit_steps.filter(|s| !s.is_empty()) {
        return steps.to_vec();
    }

    let last_line = line_count.saturating_sub(1);

    if contexts.is_empty() {
        return vec![overview_step(last_line, total_duration)];
    }

    let durations = split_duration(total_duration, contexts.len());

    contexts
        .iter()
        .zip(durations)
        .map(|(ctx, duration)| context_step(ctx, last_line, duration))
        .collect()
}

/// Split `total` into `parts` floor-divided shares, remainder on the last.
fn split_duration(total: u32, parts: usize) -> Vec<u32> {
    if parts == 0 {
        return Vec::new();
    }

    // `parts` may exceed u32::MAX in theory; the share is then 0.
    let share = u32::try_from(parts).map_or(0, |p| total / p);
    let mut durations = vec![share; parts];
    let assigned = u64::from(share) * (parts as u64 - 1);
    if let Some(last) = durations.last_mut() {
        // assigned <= total, so this fits.
        *last = u32::try_from(u64::from(total) - assigned).unwrap_or(u32::MAX);
    }
    durations
}

fn overview_step(last_line: usize, duration: u32) -> WalkthroughStep {
    WalkthroughStep {
        start_line: 0,
        end_line: last_line,
        title: "Overview".to_string(),
        description: "No individual changes to walk through; showing the whole file.".to_string(),
        focus_type: FocusType::Callout,
        duration,
    }
}

fn context_step(ctx: &ChangeContext, last_line: usize, duration: u32) -> WalkthroughStep {
    let (first, last) = ctx.span();
    let start_line = first.min(last_line);
    let end_line = last.min(last_line).max(start_line);

    let focus_type = if ctx.importance == Importance::Critical {
        FocusType::Zoom
    } else {
        FocusType::Highlight
    };

    WalkthroughStep {
        start_line,
        end_line,
        title: ctx.summary.clone(),
        description: ctx.importance.narration_hint().to_string(),
        focus_type,
        duration,
    }
}
