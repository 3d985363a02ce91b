use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydrocast monthly hydro-power forecaster.
#[derive(Parser)]
#[command(
    name = "hydrocast",
    version,
    about = "Monthly hydro-power forecast and feasibility screening"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Forecast monthly flow and power for a river site.
    Forecast(ForecastArgs),
    /// Print an example run file.
    Template(TemplateArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML run file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override river name from the run file.
    #[arg(long)]
    pub name: Option<String>,

    /// Override baseline river flow (m³/s).
    #[arg(long = "base-flow")]
    pub base_flow: Option<f64>,

    /// Override head (m).
    #[arg(long)]
    pub head: Option<f64>,

    /// Months to forecast, comma separated (e.g. `jan,feb,mar` or `1,2,3`).
    /// Months missing from the run file use default climate values.
    #[arg(short, long, value_delimiter = ',')]
    pub months: Vec<String>,

    /// Output format: `table` or `json`.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Width of text charts in characters.
    #[arg(long = "chart-width")]
    pub chart_width: Option<usize>,

    /// Omit text charts from table output.
    #[arg(long = "no-charts")]
    pub no_charts: bool,
}

/// Arguments for the `template` subcommand.
#[derive(clap::Args)]
pub struct TemplateArgs {
    /// Write the template to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
