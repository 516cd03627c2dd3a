//! Server-issued record identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the data store.
///
/// json-server hands out integers in some versions and strings in others, so
/// both shapes are accepted and written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    /// Wrap a freshly generated text id (UUID v7, time-sortable)
    #[must_use]
    pub fn generate() -> Self {
        Self::Text(uuid::Uuid::now_v7().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Only canonical integers become numbers; "0123" stays text.
        Ok(match s.parse::<u64>() {
            Ok(value) if value.to_string() == s => Self::Number(value),
            _ => Self::Text(s.to_string()),
        })
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_keep_their_json_shape() {
        let numeric: RecordId = serde_json::from_str("7").unwrap();
        let text: RecordId = serde_json::from_str("\"a1b2\"").unwrap();

        assert_eq!(numeric, RecordId::Number(7));
        assert_eq!(text, RecordId::Text("a1b2".to_string()));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"a1b2\"");
    }

    #[test]
    fn parse_prefers_numbers() {
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId::Number(42));
        assert_eq!(
            "4f2c".parse::<RecordId>().unwrap(),
            RecordId::Text("4f2c".to_string())
        );
    }

    #[test]
    fn non_canonical_digits_stay_text() {
        for raw in ["0123", "007", "+5"] {
            assert_eq!(
                raw.parse::<RecordId>().unwrap(),
                RecordId::Text(raw.to_string())
            );
        }
        assert_eq!("0".parse::<RecordId>().unwrap(), RecordId::Number(0));
    }

    #[test]
    fn display_renders_raw_value() {
        assert_eq!(RecordId::Number(3).to_string(), "3");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(RecordId::generate(), RecordId::generate());
    }
}
