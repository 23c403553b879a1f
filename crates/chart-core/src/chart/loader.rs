use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::timing::integrate_duration;
use super::types::{Chart, max_tick};
use crate::config::format::{EXTENSION, INLINE_ORIGIN};
use crate::error::{Error, Result};
use crate::model::{FormatVersion, Record, Tempo, decode, decode_list};

/// Top level of a chart document. Record lists stay undecoded so each
/// element is named by position in errors.
#[derive(Debug, Deserialize)]
struct ChartDocument {
    format_version: FormatVersion,
    time_base: i64,
    start_offset_time: f64,
    page_list: Vec<Value>,
    tempo_list: Vec<Value>,
    note_list: Vec<Value>,
    event_order_list: Vec<Value>,
}

impl Record for ChartDocument {
    const RECORD: &'static str = "chart";
    const FIELDS: &'static [&'static str] = &[
        "format_version",
        "time_base",
        "start_offset_time",
        "page_list",
        "tempo_list",
        "note_list",
        "event_order_list",
    ];
}

/// Load a chart from a `.json` file.
///
/// Shorthand for [`Chart::load`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Chart> {
    Chart::load(path)
}

impl Chart {
    /// Load a chart from a `.json` file.
    ///
    /// The extension is checked before the file is touched. Either every
    /// field and list decodes and a complete chart is returned, or the
    /// first failure is.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_extension(path)?;

        debug!("Loading chart from {}", path.display());
        let bytes = read_chart_file(path)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
            origin: path.display().to_string(),
            source,
        })?;

        let chart = Self::from_value(&value)?;
        debug!(
            "Loaded chart {}: {} pages, {} tempos, {} notes, {} events, {:.3}s",
            path.display(),
            chart.page_list.len(),
            chart.tempo_list.len(),
            chart.note_list.len(),
            chart.event_order_list.len(),
            chart.max_time
        );
        Ok(chart)
    }

    /// Parse a chart from JSON text. No extension check applies.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|source| Error::Parse {
            origin: INLINE_ORIGIN.to_string(),
            source,
        })?;
        Self::from_value(&value)
    }

    /// Build a chart from an already decoded JSON document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let document: ChartDocument = decode(ChartDocument::RECORD, value)?;

        let page_list = decode_list("page_list", &document.page_list)?;
        let mut tempo_list: Vec<Tempo> = decode_list("tempo_list", &document.tempo_list)?;
        tempo_list.push(Tempo::sentinel(max_tick(&page_list)));

        let note_list = decode_list("note_list", &document.note_list)?;
        let event_order_list = decode_list("event_order_list", &document.event_order_list)?;

        let max_time = integrate_duration(&tempo_list, document.time_base);

        Ok(Self {
            format_version: document.format_version,
            time_base: document.time_base,
            start_offset_time: document.start_offset_time,
            page_list,
            tempo_list,
            note_list,
            event_order_list,
            max_time,
        })
    }
}

fn check_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == EXTENSION => Ok(()),
        _ => Err(Error::Format {
            path: path.to_path_buf(),
        }),
    }
}

fn read_chart_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| match source.kind() {
        IoErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
