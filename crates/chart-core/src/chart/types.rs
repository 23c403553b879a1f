use crate::model::{Event, FormatVersion, Note, Page, Tempo};

/// A fully loaded chart.
///
/// Built only by the loader. `tempo_list` always ends with the sentinel tempo
/// and `max_time` is derived from it; neither can be changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub(super) format_version: FormatVersion,
    pub(super) time_base: i64,
    pub(super) start_offset_time: f64,
    pub(super) page_list: Vec<Page>,
    pub(super) tempo_list: Vec<Tempo>,
    pub(super) note_list: Vec<Note>,
    pub(super) event_order_list: Vec<Event>,
    pub(super) max_time: f64,
}

impl Chart {
    pub fn format_version(&self) -> &FormatVersion {
        &self.format_version
    }

    /// Ticks per beat.
    pub fn time_base(&self) -> i64 {
        self.time_base
    }

    pub fn start_offset_time(&self) -> f64 {
        self.start_offset_time
    }

    pub fn page_list(&self) -> &[Page] {
        &self.page_list
    }

    /// Tempo changes in document order, followed by the sentinel.
    pub fn tempo_list(&self) -> &[Tempo] {
        &self.tempo_list
    }

    /// Tempo changes as written in the chart, without the sentinel.
    pub fn source_tempos(&self) -> &[Tempo] {
        let end = self.tempo_list.len().saturating_sub(1);
        &self.tempo_list[..end]
    }

    pub fn note_list(&self) -> &[Note] {
        &self.note_list
    }

    pub fn event_order_list(&self) -> &[Event] {
        &self.event_order_list
    }

    /// Total chart duration in seconds.
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// End tick of the last page, 0 for a chart without pages.
    pub fn max_tick(&self) -> i64 {
        max_tick(&self.page_list)
    }
}

pub(super) fn max_tick(pages: &[Page]) -> i64 {
    pages.last().map_or(0, |page| page.end_tick)
}
