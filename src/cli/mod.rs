//! Command-line parsing for the dip-curve generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the curve math. Flags only choose a preset and where/how output
//! is written; the shape constants themselves are fixed per preset.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Preset;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dip", version, about = "Diffractive dip-curve generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a preset curve, print a summary, and write CSV/SVG/JSON outputs.
    Generate(GenerateArgs),
    /// Plot a previously written run JSON in the terminal.
    Plot(PlotArgs),
    /// List the available presets.
    Presets,
}

/// Options for `dip generate`.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Which fixed parameter set to generate.
    #[arg(short = 'p', long, value_enum, default_value_t = Preset::Lorentzian)]
    pub preset: Preset,

    /// Directory for CSV/SVG/JSON outputs (created if missing).
    #[arg(short = 'o', long, default_value = "predictions")]
    pub out_dir: PathBuf,

    /// Skip the CSV and run JSON exports.
    #[arg(long)]
    pub no_export: bool,

    /// Skip the SVG chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Chart width (pixels).
    #[arg(long, default_value_t = 1400)]
    pub chart_width: u32,

    /// Chart height (pixels).
    #[arg(long, default_value_t = 1000)]
    pub chart_height: u32,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `dip generate`.
    #[arg(long, value_name = "JSON")]
    pub run: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = Cli::parse_from(["dip", "generate"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.preset, Preset::Lorentzian);
        assert_eq!(args.out_dir, PathBuf::from("predictions"));
        assert!(!args.no_export && !args.no_chart && !args.no_plot);
    }

    #[test]
    fn preset_flag_parses_value_enum() {
        let cli = Cli::parse_from(["dip", "generate", "--preset", "suppression", "--no-chart"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.preset, Preset::Suppression);
        assert!(args.no_chart);
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
