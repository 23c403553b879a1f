use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not a chart file (expected .json extension): {}", path.display())]
    Format { path: PathBuf },

    #[error("Chart file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read chart file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse chart JSON from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing field `{field}` in {record}")]
    MissingField { record: String, field: &'static str },

    #[error("Invalid {record}: {source}")]
    InvalidField {
        record: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fieldless discriminant of [`Error`], for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    NotFound,
    Io,
    Parse,
    MissingField,
    InvalidField,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } => ErrorKind::Format,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Io { .. } => ErrorKind::Io,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::InvalidField { .. } => ErrorKind::InvalidField,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = Error::MissingField {
            record: "tempo_list[2]".to_string(),
            field: "value",
        };
        assert_eq!(err.to_string(), "Missing field `value` in tempo_list[2]");
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_format_message_contains_path() {
        let err = Error::Format {
            path: PathBuf::from("songs/chart.txt"),
        };
        assert!(err.to_string().contains("songs/chart.txt"));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_invalid_field_keeps_source() {
        let source = serde_json::from_value::<i64>(serde_json::json!("480")).unwrap_err();
        let err = Error::InvalidField {
            record: "page_list[0]".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidField);
        assert!(err.to_string().starts_with("Invalid page_list[0]: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::Parse {
            origin: "<input>".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(std::error::Error::source(&err).is_some());
    }
}
