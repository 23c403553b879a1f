use serde::Serialize;

use super::types::Chart;
use crate::model::FormatVersion;

/// Headline numbers of a loaded chart, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub format_version: FormatVersion,
    pub time_base: i64,
    pub start_offset_time: f64,
    pub page_count: usize,
    /// Includes the sentinel.
    pub tempo_count: usize,
    pub note_count: usize,
    pub event_count: usize,
    pub max_tick: i64,
    pub max_time: f64,
}

impl Chart {
    pub fn summary(&self) -> ChartSummary {
        ChartSummary {
            format_version: self.format_version.clone(),
            time_base: self.time_base,
            start_offset_time: self.start_offset_time,
            page_count: self.page_list.len(),
            tempo_count: self.tempo_list.len(),
            note_count: self.note_list.len(),
            event_count: self.event_order_list.len(),
            max_tick: self.max_tick(),
            max_time: self.max_time,
        }
    }
}
