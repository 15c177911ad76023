//! Payload format configuration for step sources and destinations.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// How a payload is parsed or encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// The payload format.
    pub format_type: FormatType,
    /// Format-specific options.
    #[serde(default)]
    pub options: FormatOptions,
}

impl FormatConfig {
    /// Creates a csv format config with no options set.
    pub fn csv() -> Self {
        Self {
            format_type: FormatType::Csv,
            options: FormatOptions::default(),
        }
    }

    /// Creates a json format config.
    pub fn json() -> Self {
        Self {
            format_type: FormatType::Json,
            options: FormatOptions::default(),
        }
    }
}

/// Supported payload formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FormatType {
    /// Comma-separated values.
    Csv,
    /// JSON array of records.
    Json,
}

/// Format-specific options.
///
/// Only csv has options today; json payloads serialize these as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Whether the first csv row is a header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_header: Option<bool>,
    /// Csv field delimiter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl FormatOptions {
    /// The options a fresh csv step starts from: header row, comma delimiter.
    pub fn csv_defaults() -> Self {
        Self {
            has_header: Some(true),
            delimiter: Some(",".to_owned()),
        }
    }

    /// Returns whether no option has been set.
    pub fn is_empty(&self) -> bool {
        self.has_header.is_none() && self.delimiter.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constructors() {
        assert_eq!(FormatConfig::csv().format_type, FormatType::Csv);
        assert_eq!(FormatConfig::json().format_type, FormatType::Json);
        assert!(FormatConfig::json().options.is_empty());
    }

    #[test]
    fn test_empty_options_serialize_as_empty_object() {
        let json = serde_json::to_value(FormatConfig::json()).unwrap();
        assert_eq!(json, serde_json::json!({"format_type": "json", "options": {}}));
    }

    #[test]
    fn test_csv_defaults() {
        let options = FormatOptions::csv_defaults();
        assert_eq!(options.has_header, Some(true));
        assert_eq!(options.delimiter.as_deref(), Some(","));
        assert!(!options.is_empty());
    }

    #[test]
    fn test_options_default_when_absent() {
        let config: FormatConfig =
            serde_json::from_value(serde_json::json!({"format_type": "csv"})).unwrap();
        assert!(config.options.is_empty());
    }
}
