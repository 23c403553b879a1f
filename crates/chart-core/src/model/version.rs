use serde::{Deserialize, Serialize};

/// Chart `format_version`, which charts write either as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatVersion {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatVersion::Number(n) => write!(f, "{}", n),
            FormatVersion::Text(s) => write!(f, "{}", s),
        }
    }
}
