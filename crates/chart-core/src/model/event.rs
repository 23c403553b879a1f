use serde::Deserialize;
use serde_json::Value;

use super::record::Record;

/// A scripted trigger point. The payload entries are kept as decoded JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub tick: i64,
    pub event_list: Vec<Value>,
}

impl Record for Event {
    const RECORD: &'static str = "event";
    const FIELDS: &'static [&'static str] = &["tick", "event_list"];
}
