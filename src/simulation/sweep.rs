//! Critical-index sweep: run one simulation per critical tool position.
//!
//! Every index gets its own [`SplitMix64`] stream seeded with
//! `seed + index`, so a fixed seed reproduces the whole series and no two
//! indices share draws. Without a configured seed the base seed comes from
//! OS entropy and is recorded in the returned series.

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::N_WAFERS;
use crate::error::LineError;
use crate::types::LineParams;

use super::accumulation::simulate_accumulation;
use super::fast_prng::SplitMix64;
use super::survival::simulate_survival;

/// Fixed inputs of a sweep. `line.critical_index` is overwritten per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepConfig {
    pub n_wafers: usize,
    pub line: LineParams,
    /// Base seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            n_wafers: N_WAFERS,
            line: LineParams::default(),
            seed: None,
        }
    }
}

/// One statistic per critical index, as two aligned sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSeries {
    pub metric: String,
    pub seed: u64,
    pub n_wafers: usize,
    pub n_tools: usize,
    pub base_p: f64,
    pub critical_p: f64,
    pub boosted_p: f64,
    pub critical_indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl SweepSeries {
    fn new(metric: &str, config: &SweepConfig, seed: u64, values: Vec<f64>) -> Self {
        Self {
            metric: metric.to_string(),
            seed,
            n_wafers: config.n_wafers,
            n_tools: config.line.n_tools,
            base_p: config.line.base_p,
            critical_p: config.line.critical_p,
            boosted_p: config.line.boosted_p,
            critical_indices: (0..values.len()).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (critical index, value) pairs for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.critical_indices
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| (x as f64, y))
    }

    /// Same sweep with every value transformed, under a new metric name.
    pub fn map(&self, metric: &str, f: impl Fn(f64) -> f64) -> SweepSeries {
        SweepSeries {
            metric: metric.to_string(),
            values: self.values.iter().map(|&v| f(v)).collect(),
            ..self.clone()
        }
    }
}

/// Both statistics of an accumulation sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccumulationSweep {
    pub total_failures: SweepSeries,
    pub mean_failures: SweepSeries,
}

/// Base seed for a sweep: the configured one, else fresh entropy.
pub fn resolve_seed(config: &SweepConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Run `run` once per critical index in `0..n_tools`, in order.
pub fn sweep_critical_index<T, F>(
    config: &SweepConfig,
    seed: u64,
    mut run: F,
) -> Result<Vec<T>, LineError>
where
    F: FnMut(&LineParams, &mut SplitMix64) -> Result<T, LineError>,
{
    config.line.validate()?;
    (0..config.line.n_tools)
        .map(|idx| {
            let params = config.line.with_critical_index(idx);
            let mut rng = SplitMix64::new(seed.wrapping_add(idx as u64));
            run(&params, &mut rng)
        })
        .collect()
}

/// Survival yield for every critical index. Metric name: `yield`.
pub fn sweep_survival(config: &SweepConfig) -> Result<SweepSeries, LineError> {
    let seed = resolve_seed(config);
    info!(
        seed,
        n_tools = config.line.n_tools,
        n_wafers = config.n_wafers,
        "survival sweep"
    );
    let yields = sweep_critical_index(config, seed, |params, rng| {
        let y = simulate_survival(config.n_wafers, params, rng)?;
        debug!(critical_index = params.critical_index, yield_fraction = y, "swept");
        Ok(y)
    })?;
    Ok(SweepSeries::new("yield", config, seed, yields))
}

/// Total and mean fail counts for every critical index.
pub fn sweep_accumulation(config: &SweepConfig) -> Result<AccumulationSweep, LineError> {
    let seed = resolve_seed(config);
    info!(
        seed,
        n_tools = config.line.n_tools,
        n_wafers = config.n_wafers,
        "accumulation sweep"
    );
    let counts = sweep_critical_index(config, seed, |params, rng| {
        simulate_accumulation(config.n_wafers, params, rng)
    })?;
    let totals = counts.iter().map(|c| c.total_failures as f64).collect();
    let means = counts.iter().map(|c| c.mean_failures).collect();
    Ok(AccumulationSweep {
        total_failures: SweepSeries::new("total_failures", config, seed, totals),
        mean_failures: SweepSeries::new("mean_failures", config, seed, means),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> SweepConfig {
        SweepConfig {
            n_wafers: 500,
            line: LineParams {
                n_tools: 20,
                ..LineParams::default()
            },
            seed: Some(seed),
        }
    }

    #[test]
    fn test_sweep_visits_every_index_in_order() {
        let config = small_config(1);
        let seen =
            sweep_critical_index(&config, 1, |params, _| Ok(params.critical_index)).unwrap();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_sweep_rejects_invalid_line_before_running() {
        let mut config = small_config(1);
        config.line.boosted_p = 1.1;
        let mut calls = 0;
        let result = sweep_critical_index(&config, 1, |_, _| {
            calls += 1;
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_survival_sweep_aligned_and_bounded() {
        let series = sweep_survival(&small_config(42)).unwrap();
        assert_eq!(series.metric, "yield");
        assert_eq!(series.seed, 42);
        assert_eq!(series.len(), 20);
        assert_eq!(series.critical_indices, (0..20).collect::<Vec<_>>());
        assert!(series.values.iter().all(|&y| (0.0..=1.0).contains(&y)));
    }

    #[test]
    fn test_survival_sweep_reproducible() {
        let a = sweep_survival(&small_config(7)).unwrap();
        let b = sweep_survival(&small_config(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_map_to_fail_rate() {
        let series = sweep_survival(&small_config(3)).unwrap();
        let fail = series.map("fail_rate", |y| 1.0 - y);
        assert_eq!(fail.metric, "fail_rate");
        assert_eq!(fail.critical_indices, series.critical_indices);
        for (y, f) in series.values.iter().zip(&fail.values) {
            assert!((y + f - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_accumulation_sweep_consistent() {
        let config = small_config(11);
        let sweep = sweep_accumulation(&config).unwrap();
        assert_eq!(sweep.total_failures.len(), 20);
        assert_eq!(sweep.mean_failures.len(), 20);
        for (total, mean) in sweep
            .total_failures
            .values
            .iter()
            .zip(&sweep.mean_failures.values)
        {
            assert!((mean * config.n_wafers as f64 - total).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_line_gives_empty_series() {
        let mut config = small_config(1);
        config.line.n_tools = 0;
        let series = sweep_survival(&config).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.points().count(), 0);
    }

    #[test]
    fn test_points_pairs_index_with_value() {
        let series = sweep_survival(&small_config(5)).unwrap();
        let points: Vec<_> = series.points().collect();
        assert_eq!(points[3], (3.0, series.values[3]));
    }
}
