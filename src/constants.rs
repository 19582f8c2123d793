//! Reference line configuration.
//!
//! These are the fixed values the sweep binaries run with. A 100-tool line
//! with a 0.5% base fail rate keeps roughly 60% of wafers when no critical
//! tool is present (0.995^100 ≈ 0.606), which leaves plenty of headroom for
//! the critical tool's effect to show up in the sweep.

/// Wafers per simulated run.
pub const N_WAFERS: usize = 10_000;

/// Tools in the line. The sweep visits every critical index in `0..N_TOOLS`.
pub const N_TOOLS: usize = 100;

/// Fail probability of an ordinary tool for an unflagged wafer.
pub const BASE_FAIL_RATE: f64 = 0.005;

/// Fail probability of the critical tool itself.
pub const CRITICAL_TOOL_FAIL_RATE: f64 = 0.5;

/// Fail probability downstream of the critical tool for flagged wafers.
pub const BOOSTED_FAIL_RATE: f64 = 0.05;

/// Default directory for charts and JSON series.
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

/// Chart size in pixels (width, height).
pub const CHART_SIZE: (u32, u32) = (1000, 600);
