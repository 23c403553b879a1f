//! Check command implementation.

use anyhow::{Result, bail};
use chart_core::Chart;

/// Run the check command
pub fn run(chart: &Chart) -> Result<()> {
    let diagnostics = chart.diagnose();
    if diagnostics.is_empty() {
        println!("No problems found");
        return Ok(());
    }

    for diagnostic in &diagnostics {
        println!("- {}", diagnostic);
    }
    bail!("{} problem(s) found", diagnostics.len());
}
