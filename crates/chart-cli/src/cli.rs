//! CLI argument definitions for chart.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chart")]
#[command(about = "Inspect page-scrolling rhythm game charts", version)]
pub struct Args {
    /// Chart file to load (defaults to the bundled sample chart)
    #[arg(long, short, global = true, value_name = "FILE", env = "CHART_PATH")]
    pub chart: Option<PathBuf>,

    /// Show debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print chart metadata and record counts
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a tick to seconds
    Time {
        /// Tick to convert
        #[arg(long, allow_negative_numbers = true)]
        tick: i64,
    },
    /// Report ordering and reference problems
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_path_env() {
        // SAFETY: no other test in this binary reads or writes CHART_PATH
        unsafe { std::env::set_var("CHART_PATH", "from_env.json") };
        let from_env = Args::try_parse_from(["chart", "check"]);
        let from_flag = Args::try_parse_from(["chart", "--chart", "from_flag.json"]);
        unsafe { std::env::remove_var("CHART_PATH") };

        assert_eq!(from_env.unwrap().chart, Some(PathBuf::from("from_env.json")));
        assert_eq!(from_flag.unwrap().chart, Some(PathBuf::from("from_flag.json")));
    }
}
