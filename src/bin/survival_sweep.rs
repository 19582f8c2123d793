//! failrate-survival: Sweep the critical tool along the line, chart final fail rate.
//!
//! Kill-on-fail line. For each critical index 0..N_TOOLS the yield of
//! N_WAFERS wafers is simulated; the chart shows `1 - yield`.
//! Writes `survival_fail_rate.svg` and `.json` to `FAILRATE_OUTPUT_DIR`.

use std::time::Instant;

use plotters::style::BLUE;

use failrate::env_config;
use failrate::plot::{render_sweep_chart, SeriesChart};
use failrate::simulation::{sweep_survival, SweepConfig};
use failrate::storage::{chart_path, save_series, series_path};

const OUTPUT_NAME: &str = "survival_fail_rate";

fn main() {
    env_config::init_logging();
    let out_dir = env_config::output_dir();
    let config = SweepConfig {
        seed: env_config::seed(),
        ..SweepConfig::default()
    };

    println!("=== failrate-survival ===");
    println!(
        "Line: {} tools, base={}, critical={}, boosted={}; {} wafers/run",
        config.line.n_tools,
        config.line.base_p,
        config.line.critical_p,
        config.line.boosted_p,
        config.n_wafers
    );

    let t0 = Instant::now();
    let yields = sweep_survival(&config).unwrap_or_else(|e| {
        eprintln!("Sweep failed: {}", e);
        std::process::exit(1);
    });
    let fail_rates = yields.map("fail_rate", |y| 1.0 - y);

    for (idx, fail_rate) in fail_rates.points() {
        println!(
            "[{:>3}/{}] critical index {:>3}  fail rate {:.4}",
            idx as usize + 1,
            fail_rates.len(),
            idx,
            fail_rate
        );
    }

    let chart = SeriesChart {
        title: "Effect of Critical Tool Position on Final Wafer Fail Rate",
        x_label: "Critical Tool Index (Position in Line)",
        y_label: "Total Final Fail Rate",
        color: BLUE,
    };
    let svg = chart_path(&out_dir, OUTPUT_NAME);
    let json = series_path(&out_dir, OUTPUT_NAME);
    if let Err(e) = render_sweep_chart(&svg, &fail_rates, &chart)
        .and_then(|_| save_series(&fail_rates, &json))
    {
        eprintln!("Failed to write results: {}", e);
        std::process::exit(1);
    }

    println!(
        "\nDone. {} critical positions (seed={}) in {:.1}s.",
        fail_rates.len(),
        fail_rates.seed,
        t0.elapsed().as_secs_f64()
    );
    println!("Chart: {}", svg.display());
    println!("Series: {}", json.display());
}
