//! Chart entity records.
//!
//! This module contains the records a chart is built from:
//! - `Page` - screen-scroll segments
//! - `Tempo` - tempo change points
//! - `Note`, `NoteKind` - playable elements
//! - `Event` - scripted trigger points
//! - `FormatVersion` - the chart's format version tag
//! - `Record`, `decode` - required-field checked decoding from JSON

mod event;
mod note;
mod page;
mod record;
mod tempo;
mod version;

pub use event::*;
pub use note::*;
pub use page::*;
pub use record::*;
pub use tempo::*;
pub use version::*;
