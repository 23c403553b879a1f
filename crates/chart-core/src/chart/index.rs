use std::collections::{HashMap, HashSet};

use super::types::Chart;
use crate::model::{Note, Page};

/// Note lookup by id, built once over a chart's note list.
///
/// `next_id` links are resolved through this index instead of being stored
/// as references. When ids repeat, the first note with that id wins.
#[derive(Debug, Clone)]
pub struct NoteIndex<'a> {
    notes: &'a [Note],
    positions: HashMap<i64, usize>,
}

impl<'a> NoteIndex<'a> {
    pub fn new(notes: &'a [Note]) -> Self {
        let mut positions = HashMap::with_capacity(notes.len());
        for (position, note) in notes.iter().enumerate() {
            positions.entry(note.id).or_insert(position);
        }
        Self { notes, positions }
    }

    /// Position of the note with `id` in the note list.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn get(&self, id: i64) -> Option<&'a Note> {
        self.position(id).map(|position| &self.notes[position])
    }

    /// The note `note.next_id` points at, if it exists.
    pub fn next(&self, note: &Note) -> Option<&'a Note> {
        if note.next_id < 0 {
            return None;
        }
        self.get(note.next_id)
    }

    /// Follows `next_id` links starting at `head` (included).
    ///
    /// Stops at the first missing link or at the first note already visited.
    pub fn chain(&self, head: &'a Note) -> Vec<&'a Note> {
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        let mut current = Some(head);
        while let Some(note) = current {
            if !visited.insert(note.id) {
                break;
            }
            chain.push(note);
            current = self.next(note);
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Chart {
    pub fn note_index(&self) -> NoteIndex<'_> {
        NoteIndex::new(&self.note_list)
    }

    /// The page a note sits on, `None` when `page_index` is out of range.
    pub fn page_of(&self, note: &Note) -> Option<&Page> {
        usize::try_from(note.page_index)
            .ok()
            .and_then(|index| self.page_list.get(index))
    }

    /// The first page whose tick range contains `tick`, with its position.
    pub fn page_at(&self, tick: i64) -> Option<(usize, &Page)> {
        self.page_list
            .iter()
            .enumerate()
            .find(|(_, page)| page.contains(tick))
    }
}
