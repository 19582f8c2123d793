//! Core data structures: line parameters and per-run outcomes.
//!
//! [`LineParams`] describes one line configuration. It is plain data; the
//! simulators call [`LineParams::validate`] before touching any wafer, so an
//! out-of-range probability never produces a partial result.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::LineError;

/// One linear line of `n_tools` tools with a single critical tool.
///
/// `critical_index` outside `0..n_tools` means the line has no critical tool:
/// every step then runs at `base_p` and neither `critical_p` nor `boosted_p`
/// is ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    pub n_tools: usize,
    /// Fail probability for unflagged wafers (and for all wafers upstream of
    /// the critical tool).
    pub base_p: f64,
    /// 0-based position of the critical tool.
    pub critical_index: usize,
    /// Fail probability at the critical tool. Failing there flags, never kills.
    pub critical_p: f64,
    /// Fail probability downstream of the critical tool for flagged wafers.
    pub boosted_p: f64,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            n_tools: N_TOOLS,
            base_p: BASE_FAIL_RATE,
            critical_index: 0,
            critical_p: CRITICAL_TOOL_FAIL_RATE,
            boosted_p: BOOSTED_FAIL_RATE,
        }
    }
}

impl LineParams {
    /// Same line with the critical tool moved to `critical_index`.
    pub fn with_critical_index(self, critical_index: usize) -> Self {
        Self {
            critical_index,
            ..self
        }
    }

    /// Whether the critical tool lies on the line at all.
    pub fn has_critical_tool(&self) -> bool {
        self.critical_index < self.n_tools
    }

    /// Reject probabilities outside [0, 1] (NaN included).
    pub fn validate(&self) -> Result<(), LineError> {
        check_probability("base_p", self.base_p)?;
        check_probability("critical_p", self.critical_p)?;
        check_probability("boosted_p", self.boosted_p)?;
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), LineError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LineError::InvalidProbability { name, value })
    }
}

/// Position of a tool step relative to the critical tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Upstream of the critical tool (or no critical tool on the line).
    Upstream,
    /// The critical tool itself.
    Critical,
    /// Downstream of the critical tool.
    Downstream,
}

/// Aggregate of an accumulation-variant run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FailureCounts {
    /// Arithmetic mean of per-wafer fail counters.
    pub mean_failures: f64,
    /// Sum of per-wafer fail counters.
    pub total_failures: u64,
}

/// Population snapshot taken after one tool step of a survival run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub tool: usize,
    pub kind: StepKind,
    /// Wafers that drew a fail at this step (flagged at the critical tool,
    /// killed everywhere else).
    pub failed: usize,
    pub alive: usize,
    pub flagged: usize,
}
