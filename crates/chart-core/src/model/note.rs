use serde::Deserialize;
use strum::{FromRepr, IntoStaticStr};

use super::record::Record;

/// Known note types. Charts may carry other values; [`Note::note_type`] keeps the raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr)]
#[repr(i64)]
pub enum NoteKind {
    Click = 0,
    Hold = 1,
    LongHold = 2,
    DragHead = 3,
    DragChild = 4,
    Flick = 5,
    ClickDragHead = 6,
    ClickDragChild = 7,
}

impl NoteKind {
    pub fn from_raw(value: i64) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn is_hold(&self) -> bool {
        matches!(self, NoteKind::Hold | NoteKind::LongHold)
    }

    /// Drag notes are linked through `next_id`.
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            NoteKind::DragHead
                | NoteKind::DragChild
                | NoteKind::ClickDragHead
                | NoteKind::ClickDragChild
        )
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// One playable element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    /// Position in the chart's page list. Not bounds checked.
    pub page_index: i64,
    /// Raw `type` value from the chart.
    #[serde(rename = "type")]
    pub note_type: i64,
    pub id: i64,
    pub tick: i64,
    /// Horizontal position, `0.0..=1.0` across the play area.
    pub x: f64,
    pub has_sibling: bool,
    pub hold_tick: i64,
    /// Id of the following note in a chain, resolved by lookup. Negative at the end of a chain.
    pub next_id: i64,
    pub is_forward: bool,
}

impl Note {
    pub fn kind(&self) -> Option<NoteKind> {
        NoteKind::from_raw(self.note_type)
    }

    /// Saturates at the `i64` bounds.
    pub fn end_tick(&self) -> i64 {
        self.tick.saturating_add(self.hold_tick)
    }
}

impl Record for Note {
    const RECORD: &'static str = "note";
    const FIELDS: &'static [&'static str] = &[
        "page_index",
        "type",
        "id",
        "tick",
        "x",
        "has_sibling",
        "hold_tick",
        "next_id",
        "is_forward",
    ];
}
