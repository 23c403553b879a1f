use serde::Deserialize;

use super::record::Record;
use crate::config::timing::{MICROS_PER_MINUTE, SENTINEL_TEMPO};

/// A tempo change point.
///
/// `value` is microseconds per beat. The loader appends one sentinel entry
/// (`value == -1`) that marks where the last tempo segment ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Tempo {
    pub tick: i64,
    pub value: i64,
}

impl Tempo {
    pub const SENTINEL_VALUE: i64 = SENTINEL_TEMPO;

    pub fn sentinel(tick: i64) -> Self {
        Self {
            tick,
            value: Self::SENTINEL_VALUE,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == Self::SENTINEL_VALUE
    }

    /// Beats per minute, `None` for the sentinel or any non-positive value.
    pub fn bpm(&self) -> Option<f64> {
        (self.value > 0).then(|| MICROS_PER_MINUTE / self.value as f64)
    }
}

impl Record for Tempo {
    const RECORD: &'static str = "tempo";
    const FIELDS: &'static [&'static str] = &["tick", "value"];
}
