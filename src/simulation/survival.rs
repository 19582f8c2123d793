//! Survival variant: a fail outside the critical tool scraps the wafer.
//!
//! Each wafer carries two bits. `alive` drops to false at the first fail on an
//! ordinary tool and never recovers. `flagged` is set by a fail at the
//! critical tool, which does not kill, and switches that wafer to the boosted
//! fail rate for the rest of the line.
//!
//! ## Recording mode
//!
//! [`simulate_survival_with_trace`] runs the identical draw sequence and
//! additionally returns one [`StepRecord`] per tool.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::LineError;
use crate::types::{LineParams, StepKind, StepRecord};

use super::step::{fail_probability, step_kind};

#[derive(Clone, Copy)]
struct Wafer {
    alive: bool,
    flagged: bool,
}

impl Default for Wafer {
    fn default() -> Self {
        Self {
            alive: true,
            flagged: false,
        }
    }
}

/// Run `n_wafers` wafers through the line and return the surviving fraction.
///
/// Zero wafers or zero tools yields exactly 1.0.
pub fn simulate_survival<R: Rng + ?Sized>(
    n_wafers: usize,
    params: &LineParams,
    rng: &mut R,
) -> Result<f64, LineError> {
    run(n_wafers, params, rng, |_| {})
}

/// Like [`simulate_survival`] but also returns a per-tool population trace.
pub fn simulate_survival_with_trace<R: Rng + ?Sized>(
    n_wafers: usize,
    params: &LineParams,
    rng: &mut R,
) -> Result<(f64, Vec<StepRecord>), LineError> {
    let mut records = Vec::with_capacity(params.n_tools);
    let yield_fraction = run(n_wafers, params, rng, |record| records.push(record))?;
    Ok((yield_fraction, records))
}

fn run<R, F>(
    n_wafers: usize,
    params: &LineParams,
    rng: &mut R,
    mut on_step: F,
) -> Result<f64, LineError>
where
    R: Rng + ?Sized,
    F: FnMut(StepRecord),
{
    params.validate()?;
    if n_wafers == 0 {
        return Ok(1.0);
    }

    let mut wafers = vec![Wafer::default(); n_wafers];

    for tool in 0..params.n_tools {
        let kind = step_kind(params, tool);
        let mut failed = 0usize;

        // One draw per wafer, dead or alive, so every step consumes the same
        // amount of randomness.
        for w in wafers.iter_mut() {
            let p = fail_probability(params, kind, w.flagged);
            let fails = rng.random::<f64>() < p && w.alive;
            if !fails {
                continue;
            }
            failed += 1;
            if kind == StepKind::Critical {
                w.flagged = true;
            } else {
                w.alive = false;
            }
        }

        let record = StepRecord {
            tool,
            kind,
            failed,
            alive: wafers.iter().filter(|w| w.alive).count(),
            flagged: wafers.iter().filter(|w| w.flagged).count(),
        };
        trace!(
            tool,
            ?kind,
            failed,
            alive = record.alive,
            flagged = record.flagged,
            "survival step"
        );
        on_step(record);
    }

    let alive = wafers.iter().filter(|w| w.alive).count();
    let yield_fraction = alive as f64 / n_wafers as f64;
    debug!(
        critical_index = params.critical_index,
        n_wafers,
        alive,
        yield_fraction,
        "survival run finished"
    );
    Ok(yield_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn line(n_tools: usize, critical_index: usize) -> LineParams {
        LineParams {
            n_tools,
            base_p: 0.005,
            critical_index,
            critical_p: 0.5,
            boosted_p: 0.05,
        }
    }

    #[test]
    fn test_zero_rates_keep_everything() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p = LineParams {
            n_tools: 50,
            base_p: 0.0,
            critical_index: 10,
            critical_p: 0.0,
            boosted_p: 0.0,
        };
        assert_eq!(simulate_survival(1000, &p, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_tools_is_identity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = LineParams {
            base_p: 1.0,
            ..line(0, 0)
        };
        assert_eq!(simulate_survival(500, &p, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_wafers_is_degenerate_full_yield() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(simulate_survival(0, &line(10, 3), &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_critical_tool_never_kills() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p = LineParams {
            n_tools: 1,
            base_p: 0.005,
            critical_index: 0,
            critical_p: 1.0,
            boosted_p: 1.0,
        };
        assert_eq!(simulate_survival(10_000, &p, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_certain_base_fail_kills_all() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p = LineParams {
            base_p: 1.0,
            ..line(5, 2)
        };
        assert_eq!(simulate_survival(1000, &p, &mut rng).unwrap(), 0.0);
    }

    #[test]
    fn test_flagged_wafers_die_at_boosted_rate() {
        // Critical tool flags every wafer; the only downstream step kills every
        // flagged wafer.
        let mut rng = SmallRng::seed_from_u64(3);
        let p = LineParams {
            n_tools: 2,
            base_p: 0.0,
            critical_index: 0,
            critical_p: 1.0,
            boosted_p: 1.0,
        };
        assert_eq!(simulate_survival(1000, &p, &mut rng).unwrap(), 0.0);

        // Same line but nobody gets flagged: boosted rate is never applied.
        let p = LineParams {
            critical_p: 0.0,
            ..p
        };
        assert_eq!(simulate_survival(1000, &p, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = LineParams {
            critical_p: 2.0,
            ..line(10, 3)
        };
        assert!(matches!(
            simulate_survival(100, &p, &mut rng),
            Err(LineError::InvalidProbability {
                name: "critical_p",
                ..
            })
        ));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let p = line(100, 40);
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(
            simulate_survival(2000, &p, &mut rng1).unwrap(),
            simulate_survival(2000, &p, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_reference_yield_near_analytic() {
        // No critical tool on the line: yield ≈ 0.995^100 ≈ 0.606.
        let mut rng = SmallRng::seed_from_u64(42);
        let y = simulate_survival(100_000, &line(100, 100), &mut rng).unwrap();
        let expected = 0.995f64.powi(100);
        assert!((y - expected).abs() < 0.01, "yield={y}, expected≈{expected:.4}");
    }

    #[test]
    fn test_trace_matches_plain_run() {
        let p = line(30, 12);
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let plain = simulate_survival(5000, &p, &mut rng1).unwrap();
        let (traced, records) = simulate_survival_with_trace(5000, &p, &mut rng2).unwrap();
        assert_eq!(plain, traced);
        assert_eq!(records.len(), 30);
        assert_eq!(records.last().unwrap().alive as f64 / 5000.0, traced);
    }

    #[test]
    fn test_trace_invariants() {
        let p = line(40, 15);
        let mut rng = SmallRng::seed_from_u64(5);
        let (_, records) = simulate_survival_with_trace(5000, &p, &mut rng).unwrap();

        let mut prev_alive = 5000;
        let mut prev_flagged = 0;
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.tool, i);
            assert!(r.alive <= prev_alive);
            match r.kind {
                StepKind::Critical => {
                    assert_eq!(r.tool, 15);
                    assert_eq!(r.alive, prev_alive, "critical tool must not kill");
                    assert_eq!(r.flagged, prev_flagged + r.failed);
                }
                _ => {
                    assert_eq!(r.flagged, prev_flagged, "only the critical tool flags");
                    assert_eq!(r.alive, prev_alive - r.failed);
                }
            }
            prev_alive = r.alive;
            prev_flagged = r.flagged;
        }
        assert!(prev_flagged > 0);
    }
}
