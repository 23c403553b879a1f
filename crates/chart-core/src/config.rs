//! Format and timing constants.
//!
//! Grouped by concern:
//! - `format` - chart file format markers
//! - `timing` - unit conversions used by the tempo integration

/// Chart file format configuration.
pub mod format {
    /// The only accepted chart file extension (compared case-sensitively).
    pub const EXTENSION: &str = "json";

    /// Origin label used in parse errors when the chart did not come from a file.
    pub const INLINE_ORIGIN: &str = "<input>";
}

/// Timing conversion configuration.
///
/// Tempo values are microseconds per beat; `time_base` is ticks per beat.
pub mod timing {
    /// Microseconds in one second.
    pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

    /// Microseconds in one minute (BPM = MICROS_PER_MINUTE / tempo value).
    pub const MICROS_PER_MINUTE: f64 = 60_000_000.0;

    /// Tempo value reserved for the trailing sentinel entry.
    pub const SENTINEL_TEMPO: i64 = -1;
}
