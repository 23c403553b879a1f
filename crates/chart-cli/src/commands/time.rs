//! Time command implementation.

use anyhow::Result;
use chart_core::Chart;
use tracing::warn;

/// Run the time command
pub fn run(chart: &Chart, tick: i64) -> Result<()> {
    if tick < 0 || tick > chart.max_tick() {
        warn!(
            "Tick {} is outside the chart (0..={}), extrapolating",
            tick,
            chart.max_tick()
        );
    }

    println!("Tick {}: {:.6}s", tick, chart.tick_to_time(tick));
    match chart.bpm_at(tick) {
        Some(bpm) => println!("BPM: {:.3}", bpm),
        None => println!("BPM: -"),
    }
    if let Some((index, page)) = chart.page_at(tick) {
        println!(
            "Page: {} ({}..{}, direction {})",
            index, page.start_tick, page.end_tick, page.scan_line_direction
        );
    }

    Ok(())
}
