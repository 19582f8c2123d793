//! Line simulation and critical-index sweeps.
//!
//! - [`step`]: Fail probability rule for a tool step (upstream / critical / downstream)
//! - [`survival`]: Kill-on-fail line, returns yield
//! - [`accumulation`]: Count-on-fail line, returns mean and total fails
//! - [`sweep`]: Run either variant for every critical tool position
//! - [`fast_prng`]: SplitMix64 streams for the sweep

pub mod accumulation;
pub mod fast_prng;
pub mod step;
pub mod survival;
pub mod sweep;

// Re-export commonly used items
pub use accumulation::simulate_accumulation;
pub use fast_prng::SplitMix64;
pub use survival::{simulate_survival, simulate_survival_with_trace};
pub use sweep::{
    resolve_seed, sweep_accumulation, sweep_critical_index, sweep_survival, AccumulationSweep,
    SweepConfig, SweepSeries,
};
