//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the generator for the chosen preset
//! - prints the summary and terminal plot
//! - writes CSV/SVG/JSON outputs

use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::cli::{Command, GenerateArgs, PlotArgs};
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `dip` binary.
pub fn run() -> Result<(), AppError> {
    // We want `dip` and `dip --preset suppression` to behave like `dip generate ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(&run_config_from_args(&args)),
        Command::Plot(args) => handle_plot(args),
        Command::Presets => {
            print!("{}", crate::report::format_presets());
            Ok(())
        }
    }
}

fn handle_generate(config: &RunConfig) -> Result<(), AppError> {
    let run = pipeline::run_preset(config.preset)?;

    println!(
        "{}",
        crate::report::format_run_summary(run.preset, &run.spec, &run.summary)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.dataset,
            &run.spec,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if !(config.export || config.chart) {
        return Ok(());
    }

    create_dir_all(&config.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output dir '{}': {e}", config.out_dir.display()),
        )
    })?;

    let stem = run.preset.name();
    let mut written: Vec<PathBuf> = Vec::new();

    if config.export {
        let curve_csv = config.out_dir.join(format!("{stem}_curve.csv"));
        let zone_csv = config.out_dir.join(format!("{stem}_zone.csv"));
        let run_json = config.out_dir.join(format!("{stem}_run.json"));

        crate::io::write_dataset_csv(&curve_csv, &run.dataset, &run.spec)?;
        crate::io::write_zone_csv(&zone_csv, &run.dataset, &run.spec)?;
        crate::io::write_run_json(&run_json, run.preset, &run.spec, &run.summary)?;
        written.extend([curve_csv, zone_csv, run_json]);
    }

    if config.chart {
        let chart = config.out_dir.join(format!("{stem}_dip.svg"));
        crate::plot::write_chart_svg(
            &chart,
            &run.dataset,
            &run.spec,
            (config.chart_width, config.chart_height),
        )?;
        written.push(chart);
    }

    println!("Files generated:");
    for path in &written {
        println!("   {}", path.display());
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let saved = crate::io::read_run_json(&args.run)?;
    debug!(
        "Loaded run '{}' generated at {}",
        saved.preset.name(),
        saved.generated_at
    );

    // The dataset is not stored; regenerate it from the saved spec.
    let run = pipeline::run_spec(saved.preset, saved.spec)?;
    let plot = crate::plot::render_ascii_plot(&run.dataset, &run.spec, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &GenerateArgs) -> RunConfig {
    RunConfig {
        preset: args.preset,
        out_dir: args.out_dir.clone(),
        export: !args.no_export,
        chart: !args.no_chart,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        chart_width: args.chart_width,
        chart_height: args.chart_height,
    }
}

/// Rewrite argv so `dip` defaults to `dip generate`.
///
/// Rules:
/// - `dip`                      -> `dip generate`
/// - `dip -p suppression ...`   -> `dip generate -p suppression ...`
/// - `dip --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("generate".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "plot" | "presets");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "generate flags".
    if arg1.starts_with('-') {
        argv.insert(1, "generate".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
