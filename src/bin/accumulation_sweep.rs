//! failrate-accumulation: Sweep the critical tool along a count-on-fail line.
//!
//! Wafers are never scrapped; every fail is counted. Charts total fails across
//! all wafers and the mean fails per wafer against the critical index.

use std::time::Instant;

use plotters::style::{RGBColor, BLUE};

use failrate::env_config;
use failrate::plot::{render_sweep_chart, SeriesChart};
use failrate::simulation::{sweep_accumulation, SweepConfig, SweepSeries};
use failrate::storage::{chart_path, save_series, series_path};
use failrate::OutputError;

const ORANGE: RGBColor = RGBColor(255, 140, 0);

fn write_outputs(
    out_dir: &std::path::Path,
    name: &str,
    series: &SweepSeries,
    chart: &SeriesChart<'_>,
) -> Result<(), OutputError> {
    let svg = chart_path(out_dir, name);
    render_sweep_chart(&svg, series, chart)?;
    save_series(series, &series_path(out_dir, name))?;
    println!("Chart: {}", svg.display());
    Ok(())
}

fn main() {
    env_config::init_logging();
    let out_dir = env_config::output_dir();
    let config = SweepConfig {
        seed: env_config::seed(),
        ..SweepConfig::default()
    };

    println!("=== failrate-accumulation ===");
    println!(
        "Line: {} tools, base={}, critical={}, boosted={}; {} wafers/run",
        config.line.n_tools,
        config.line.base_p,
        config.line.critical_p,
        config.line.boosted_p,
        config.n_wafers
    );

    let t0 = Instant::now();
    let sweep = sweep_accumulation(&config).unwrap_or_else(|e| {
        eprintln!("Sweep failed: {}", e);
        std::process::exit(1);
    });

    for (idx, (&total, &mean)) in sweep
        .total_failures
        .values
        .iter()
        .zip(&sweep.mean_failures.values)
        .enumerate()
    {
        println!(
            "[{:>3}/{}] critical index {:>3}  total fails {:>7}  mean {:.4}",
            idx + 1,
            sweep.total_failures.len(),
            idx,
            total,
            mean
        );
    }

    let total_chart = SeriesChart {
        title: "Effect of Critical Tool Position on Total Wafer Failures",
        x_label: "Critical Tool Index (Position in Line)",
        y_label: "Total Failures (All Wafers)",
        color: ORANGE,
    };
    let mean_chart = SeriesChart {
        title: "Effect of Critical Tool Position on Average Failures per Wafer",
        x_label: "Critical Tool Index (Position in Line)",
        y_label: "Average Failures per Wafer",
        color: BLUE,
    };
    let written = write_outputs(
        &out_dir,
        "accumulation_total_failures",
        &sweep.total_failures,
        &total_chart,
    )
    .and_then(|_| {
        write_outputs(
            &out_dir,
            "accumulation_mean_failures",
            &sweep.mean_failures,
            &mean_chart,
        )
    });
    if let Err(e) = written {
        eprintln!("Failed to write results: {}", e);
        std::process::exit(1);
    }

    println!(
        "\nDone. {} critical positions (seed={}) in {:.1}s.",
        sweep.total_failures.len(),
        sweep.total_failures.seed,
        t0.elapsed().as_secs_f64()
    );
}
