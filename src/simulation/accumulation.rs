//! Accumulation variant: wafers are never scrapped, fails are counted.
//!
//! Every wafer visits every tool. A fail increments the wafer's counter; a
//! fail at the critical tool additionally flags the wafer for the boosted rate
//! downstream.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::LineError;
use crate::types::{FailureCounts, LineParams, StepKind};

use super::step::{fail_probability, step_kind};

#[derive(Clone, Copy, Default)]
struct Wafer {
    failures: u32,
    flagged: bool,
}

/// Run `n_wafers` wafers through the line, counting every fail.
///
/// Zero wafers or zero tools yields `(0.0, 0)`.
pub fn simulate_accumulation<R: Rng + ?Sized>(
    n_wafers: usize,
    params: &LineParams,
    rng: &mut R,
) -> Result<FailureCounts, LineError> {
    params.validate()?;
    if n_wafers == 0 {
        return Ok(FailureCounts {
            mean_failures: 0.0,
            total_failures: 0,
        });
    }

    let mut wafers = vec![Wafer::default(); n_wafers];

    for tool in 0..params.n_tools {
        let kind = step_kind(params, tool);
        let mut failed = 0u64;
        for w in wafers.iter_mut() {
            let p = fail_probability(params, kind, w.flagged);
            if rng.random::<f64>() < p {
                w.failures += 1;
                failed += 1;
                if kind == StepKind::Critical {
                    w.flagged = true;
                }
            }
        }
        trace!(tool, ?kind, failed, "accumulation step");
    }

    let total_failures: u64 = wafers.iter().map(|w| w.failures as u64).sum();
    let mean_failures = total_failures as f64 / n_wafers as f64;
    debug!(
        critical_index = params.critical_index,
        n_wafers,
        total_failures,
        mean_failures,
        "accumulation run finished"
    );
    Ok(FailureCounts {
        mean_failures,
        total_failures,
    })
}
