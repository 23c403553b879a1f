//! # chart-core
//!
//! Loads page-scrolling rhythm-game charts from JSON.
//!
//! This crate provides:
//! - Typed chart records (Page, Tempo, Note, Event)
//! - The `.json` chart loader with typed failures
//! - Tick to seconds conversion over the tempo list
//! - Note and page lookups for id-based links
//! - Opt-in structural diagnostics
//!
//! ```no_run
//! let chart = chart_core::load("charts/song.json")?;
//! println!("{} notes, {:.2}s", chart.note_list().len(), chart.max_time());
//! # Ok::<(), chart_core::Error>(())
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod model;

// Re-export from chart module
pub use chart::{Chart, ChartSummary, Diagnostic, NoteIndex, integrate_duration, load};

// Re-export from error module
pub use error::{Error, ErrorKind, Result};

// Re-export from model module
pub use model::{Event, FormatVersion, Note, NoteKind, Page, Tempo};
