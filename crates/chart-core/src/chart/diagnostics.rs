use std::collections::HashSet;

use super::types::Chart;

/// A structural problem found in a loaded chart.
///
/// Loading never rejects these; [`Chart::diagnose`] reports them on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `tempo_list[index]` starts before the tempo preceding it.
    UnsortedTempo { index: usize },
    /// `page_list[index]` ends before it starts.
    InvertedPage { index: usize },
    PageOutOfRange { note_id: i64, page_index: i64 },
    DanglingNext { note_id: i64, next_id: i64 },
    DuplicateNoteId { note_id: i64 },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnsortedTempo { index } => {
                write!(f, "tempo_list[{}] is earlier than the tempo before it", index)
            }
            Diagnostic::InvertedPage { index } => {
                write!(f, "page_list[{}] ends before it starts", index)
            }
            Diagnostic::PageOutOfRange {
                note_id,
                page_index,
            } => write!(f, "note {} refers to missing page {}", note_id, page_index),
            Diagnostic::DanglingNext { note_id, next_id } => {
                write!(f, "note {} links to missing note {}", note_id, next_id)
            }
            Diagnostic::DuplicateNoteId { note_id } => {
                write!(f, "note id {} is used more than once", note_id)
            }
        }
    }
}

impl Chart {
    /// Report ordering and reference problems without changing the chart.
    pub fn diagnose(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        for (offset, pair) in self.source_tempos().windows(2).enumerate() {
            if pair[1].tick < pair[0].tick {
                found.push(Diagnostic::UnsortedTempo { index: offset + 1 });
            }
        }

        for (index, page) in self.page_list.iter().enumerate() {
            if page.end_tick < page.start_tick {
                found.push(Diagnostic::InvertedPage { index });
            }
        }

        let index = self.note_index();
        let mut seen = HashSet::with_capacity(self.note_list.len());
        for note in &self.note_list {
            if !seen.insert(note.id) {
                found.push(Diagnostic::DuplicateNoteId { note_id: note.id });
            }
            if self.page_of(note).is_none() {
                found.push(Diagnostic::PageOutOfRange {
                    note_id: note.id,
                    page_index: note.page_index,
                });
            }
            if note.next_id >= 0 && index.get(note.next_id).is_none() {
                found.push(Diagnostic::DanglingNext {
                    note_id: note.id,
                    next_id: note.next_id,
                });
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note(id: i64, page_index: i64, next_id: i64) -> serde_json::Value {
        json!({
            "page_index": page_index, "type": 0, "id": id, "tick": 0, "x": 0.5,
            "has_sibling": false, "hold_tick": 0, "next_id": next_id, "is_forward": false
        })
    }

    fn chart(tempos: serde_json::Value, notes: serde_json::Value) -> Chart {
        Chart::from_value(&json!({
            "format_version": 1,
            "time_base": 480,
            "start_offset_time": 0,
            "page_list": [
                { "start_tick": 0, "end_tick": 960, "scan_line_direction": 1 },
                { "start_tick": 960, "end_tick": 480, "scan_line_direction": -1 }
            ],
            "tempo_list": tempos,
            "note_list": notes,
            "event_order_list": []
        }))
        .unwrap()
    }

    #[test]
    fn test_diagnose_reports_each_problem() {
        let chart = chart(
            json!([{ "tick": 480, "value": 500000 }, { "tick": 0, "value": 500000 }]),
            json!([note(0, 0, 1), note(1, 5, -1), note(1, 1, 9)]),
        );

        let found = chart.diagnose();
        assert!(found.contains(&Diagnostic::UnsortedTempo { index: 1 }));
        assert!(found.contains(&Diagnostic::InvertedPage { index: 1 }));
        assert!(found.contains(&Diagnostic::PageOutOfRange {
            note_id: 1,
            page_index: 5
        }));
        assert!(found.contains(&Diagnostic::DuplicateNoteId { note_id: 1 }));
        assert!(found.contains(&Diagnostic::DanglingNext {
            note_id: 1,
            next_id: 9
        }));
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn test_sentinel_is_not_reported_as_unsorted() {
        // the sentinel sits at tick 480 (last page end), before the source tempo at 900
        let chart = chart(json!([{ "tick": 900, "value": 500000 }]), json!([]));
        assert!(chart.diagnose().iter().all(|d| !matches!(d, Diagnostic::UnsortedTempo { .. })));
    }

    #[test]
    fn test_display() {
        let text = Diagnostic::DanglingNext {
            note_id: 3,
            next_id: 4,
        }
        .to_string();
        assert_eq!(text, "note 3 links to missing note 4");
    }
}
