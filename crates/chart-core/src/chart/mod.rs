//! The chart aggregate and everything derived from it.
//!
//! This module contains:
//! - `Chart` - the loaded chart and its accessors
//! - `load` - the file loader
//! - Timing conversion (`integrate_duration`, `Chart::tick_to_time`)
//! - `NoteIndex` - id lookups for `next_id` links
//! - `Diagnostic` - opt-in ordering and reference checks
//! - `ChartSummary` - headline numbers for reporting

mod diagnostics;
mod index;
mod loader;
mod summary;
mod timing;
mod types;

pub use diagnostics::*;
pub use index::*;
pub use loader::*;
pub use summary::*;
pub use timing::*;
pub use types::*;
