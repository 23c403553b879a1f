use serde::Deserialize;

use super::record::Record;

/// One screen-scroll segment of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub start_tick: i64,
    pub end_tick: i64,
    /// Scan line travel direction for this page.
    pub scan_line_direction: i64,
}

impl Page {
    /// Saturates at the `i64` bounds.
    pub fn duration_ticks(&self) -> i64 {
        self.end_tick.saturating_sub(self.start_tick)
    }

    /// Whether `tick` falls inside `[start_tick, end_tick)`.
    pub fn contains(&self, tick: i64) -> bool {
        self.start_tick <= tick && tick < self.end_tick
    }
}

impl Record for Page {
    const RECORD: &'static str = "page";
    const FIELDS: &'static [&'static str] = &["start_tick", "end_tick", "scan_line_direction"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_page_from_value() {
        let value = json!({ "start_tick": 0, "end_tick": 960, "scan_line_direction": -1 });
        let page = Page::from_value(&value).unwrap();

        assert_eq!(page.start_tick, 0);
        assert_eq!(page.end_tick, 960);
        assert_eq!(page.scan_line_direction, -1);
        assert_eq!(page.duration_ticks(), 960);
    }

    #[test]
    fn test_page_contains_is_half_open() {
        let page = Page {
            start_tick: 480,
            end_tick: 960,
            scan_line_direction: 1,
        };
        assert!(page.contains(480));
        assert!(page.contains(959));
        assert!(!page.contains(960));
        assert!(!page.contains(479));
    }

    #[test]
    fn test_duration_saturates() {
        let page = Page {
            start_tick: -1,
            end_tick: i64::MAX,
            scan_line_direction: 1,
        };
        assert_eq!(page.duration_ticks(), i64::MAX);
    }

    #[test]
    fn test_page_missing_direction() {
        let value = json!({ "start_tick": 0, "end_tick": 960 });
        let err = Page::from_value(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }
}
