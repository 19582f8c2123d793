//! # failrate — critical-tool position sweeps on a wafer line
//!
//! Monte Carlo model of a linear line of tools processing a batch of wafers.
//! One tool is *critical*: it fails far more often than the rest, and a wafer
//! that fails there is flagged. Flagged wafers run at a boosted fail rate on
//! every later tool. Sweeping the critical tool's position along the line shows
//! how much its placement matters.
//!
//! ## Line variants
//!
//! | Variant | Module | Fail at ordinary tool | Result |
//! |---------|--------|-----------------------|--------|
//! | Survival | [`simulation::survival`] | wafer scrapped (absorbing) | yield fraction |
//! | Accumulation | [`simulation::accumulation`] | counter += 1, wafer continues | mean and total fails |
//!
//! In both variants a fail at the critical tool flags the wafer and never
//! scraps it. The step rule is shared ([`simulation::step`]):
//!
//! - tool `i == critical_index`: `critical_p` for every wafer
//! - tool `i > critical_index`: `boosted_p` if flagged, else `base_p`
//! - tool `i < critical_index`: `base_p`
//!
//! A `critical_index` past the end of the line means no critical tool.
//!
//! ## Sweeps
//!
//! [`simulation::sweep`] runs a variant for every critical index in
//! `0..n_tools`, producing an index-aligned [`simulation::SweepSeries`]. The
//! binaries chart these with [`plot`] and export them with [`storage`].

pub mod constants;
pub mod env_config;
pub mod error;
pub mod plot;
pub mod simulation;
pub mod storage;
pub mod types;

pub use error::{LineError, OutputError};
pub use types::{FailureCounts, LineParams, StepKind, StepRecord};
