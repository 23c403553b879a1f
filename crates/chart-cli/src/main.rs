mod cli;
mod commands;
mod sample;

use anyhow::{Context, Result};
use chart_core::Chart;
use clap::Parser;
use cli::{Args, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "chart_cli=debug,chart_core=debug"
    } else {
        "chart_cli=warn,chart_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = args.chart.unwrap_or_else(sample::sample_path);
    info!("Loading chart {}", path.display());

    let chart = Chart::load(&path)
        .with_context(|| format!("Failed to load chart {}", path.display()))?;
    info!("Loaded chart with {} notes", chart.note_list().len());

    match args.command.unwrap_or(Command::Info { json: false }) {
        Command::Info { json } => commands::info::run(&chart, json),
        Command::Time { tick } => commands::time::run(&chart, tick),
        Command::Check => commands::check::run(&chart),
    }
}
