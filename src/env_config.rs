//! Shared environment configuration for the sweep binaries.
//!
//! The line itself is fixed by [`crate::constants`]; only process-level
//! settings come from the environment: `FAILRATE_OUTPUT_DIR`, `FAILRATE_SEED`
//! and `RUST_LOG`.

use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Read `FAILRATE_OUTPUT_DIR` (default `"plots"`) and print it.
pub fn output_dir() -> PathBuf {
    let dir =
        std::env::var("FAILRATE_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
    println!("FAILRATE_OUTPUT_DIR={}", dir);
    PathBuf::from(dir)
}

/// Read `FAILRATE_SEED`. Unset or unparsable means an unseeded run.
pub fn seed() -> Option<u64> {
    let seed = parse_seed(std::env::var("FAILRATE_SEED").ok().as_deref());
    match seed {
        Some(s) => println!("FAILRATE_SEED={}", s),
        None => println!("FAILRATE_SEED unset, seeding from entropy"),
    }
    seed
}

fn parse_seed(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Install the `tracing` subscriber. `RUST_LOG` overrides the default
/// `failrate=info` filter; `RUST_LOG=failrate=trace` prints every tool step.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("failrate=info"));
    fmt().with_env_filter(env_filter).with_target(true).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None), None);
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some(" 7 ")), Some(7));
        assert_eq!(parse_seed(Some("abc")), None);
        assert_eq!(parse_seed(Some("-1")), None);
    }
}
