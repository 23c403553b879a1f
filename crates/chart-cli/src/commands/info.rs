//! Info command implementation.

use anyhow::Result;
use chart_core::Chart;

/// Run the info command
pub fn run(chart: &Chart, json: bool) -> Result<()> {
    let summary = chart.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Format version:    {}", summary.format_version);
    println!("Time base:         {} ticks/beat", summary.time_base);
    println!("Start offset:      {:.3}s", summary.start_offset_time);
    println!("Pages:             {}", summary.page_count);
    println!("Tempos:            {} (including end marker)", summary.tempo_count);
    println!("Notes:             {}", summary.note_count);
    println!("Events:            {}", summary.event_count);
    println!("Max tick:          {}", summary.max_tick);
    println!("Max time:          {:.3}s", summary.max_time);

    Ok(())
}
