//! Per-step fail probability rule shared by both line variants.

use crate::types::{LineParams, StepKind};

/// Classify tool `tool` relative to the critical tool.
#[inline(always)]
pub fn step_kind(params: &LineParams, tool: usize) -> StepKind {
    if tool == params.critical_index {
        StepKind::Critical
    } else if tool > params.critical_index {
        StepKind::Downstream
    } else {
        StepKind::Upstream
    }
}

/// Fail probability of one wafer at a step of the given kind.
///
/// The critical tool applies `critical_p` to every wafer regardless of flag.
/// Downstream, flagged wafers run at `boosted_p`. The flag cannot be set before
/// the critical step, so upstream steps always see `base_p`.
#[inline(always)]
pub fn fail_probability(params: &LineParams, kind: StepKind, flagged: bool) -> f64 {
    match kind {
        StepKind::Critical => params.critical_p,
        StepKind::Downstream if flagged => params.boosted_p,
        StepKind::Downstream | StepKind::Upstream => params.base_p,
    }
}
