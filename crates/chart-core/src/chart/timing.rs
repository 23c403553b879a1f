//! Tick to real-time conversion.
//!
//! A tempo list splits the tick timeline into segments; each segment lasts
//! `(next.tick - tick) * value / 1_000_000 / time_base` seconds. Segments are
//! taken in list order, so an unsorted tempo list gives meaningless times.

use super::types::Chart;
use crate::config::timing::MICROS_PER_SECOND;
use crate::model::Tempo;

/// Seconds covered by consecutive tempo pairs.
///
/// Only the first entry of each pair contributes its `value`, so the trailing
/// sentinel bounds the last segment without being multiplied in.
pub fn integrate_duration(tempos: &[Tempo], time_base: i64) -> f64 {
    tempos.windows(2).fold(0.0, |total, pair| {
        total + segment_seconds(pair[0].tick, pair[1].tick, pair[0].value, time_base)
    })
}

// Ticks are widened before subtracting; any pair of i64 ticks has a finite span in f64.
fn segment_seconds(from_tick: i64, to_tick: i64, value: i64, time_base: i64) -> f64 {
    (to_tick as f64 - from_tick as f64) * value as f64 / MICROS_PER_SECOND / time_base as f64
}

impl Chart {
    /// Seconds from the first tempo change to `tick`.
    ///
    /// Ticks past the last tempo change run at that tempo (also beyond the
    /// end of the chart); ticks before the first change run at the first
    /// tempo and come out negative. A chart without tempo changes gives 0.
    pub fn tick_to_time(&self, tick: i64) -> f64 {
        let tempos = self.source_tempos();
        let Some(last) = tempos.last() else {
            return 0.0;
        };

        let mut elapsed = 0.0;
        for pair in tempos.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if tick <= next.tick {
                return elapsed + segment_seconds(current.tick, tick, current.value, self.time_base);
            }
            elapsed += segment_seconds(current.tick, next.tick, current.value, self.time_base);
        }
        elapsed + segment_seconds(last.tick, tick, last.value, self.time_base)
    }

    /// The tempo in effect at `tick`: the last source tempo (in list order) at or before it.
    pub fn tempo_at(&self, tick: i64) -> Option<&Tempo> {
        self.source_tempos().iter().rfind(|tempo| tempo.tick <= tick)
    }

    pub fn bpm_at(&self, tick: i64) -> Option<f64> {
        self.tempo_at(tick).and_then(Tempo::bpm)
    }
}
