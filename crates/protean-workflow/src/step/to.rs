//! Destination definition types for a pipeline step.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use super::format::FormatConfig;
use crate::mapping::Mapping;

/// Where a pipeline step writes its data to.
///
/// The `entity` variant never carries an output config; entity writes go
/// through the platform's storage layer directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToDef {
    /// Emit records as a formatted payload.
    Format {
        /// How the payload is delivered.
        #[serde(default)]
        output: OutputMode,
        /// How records are encoded.
        #[serde(default = "FormatConfig::json")]
        format: FormatConfig,
        /// Field renames applied before encoding.
        #[serde(default)]
        mapping: Mapping,
    },
    /// Write records into a stored dynamic entity.
    Entity {
        /// Name of the entity definition to write.
        entity_definition: String,
        /// Storage path for the written records.
        path: String,
        /// How existing records are treated.
        #[serde(default)]
        mode: WriteMode,
        /// Field used to match existing records when updating.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        update_key: Option<String>,
        /// Field renames applied before writing.
        #[serde(default)]
        mapping: Mapping,
    },
}

impl ToDef {
    /// Creates an entity destination for the named entity definition.
    pub fn entity(entity_definition: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Entity {
            entity_definition: entity_definition.into(),
            path: path.into(),
            mode: WriteMode::Create,
            update_key: None,
            mapping: Mapping::new(),
        }
    }

    /// Returns the field mapping for this destination.
    pub fn mapping(&self) -> &Mapping {
        match self {
            Self::Format { mapping, .. } | Self::Entity { mapping, .. } => mapping,
        }
    }
}

impl Default for ToDef {
    fn default() -> Self {
        Self::Format {
            output: OutputMode::Api,
            format: FormatConfig::json(),
            mapping: Mapping::new(),
        }
    }
}

/// How a formatted output payload is delivered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputMode {
    /// Offer the payload as a download.
    Download,
    /// Expose the payload on the workflow's result endpoint.
    #[default]
    Api,
    /// Push the payload to a remote destination.
    Push {
        /// Address the payload is pushed to.
        destination: String,
        /// HTTP verb used for the push.
        #[serde(default)]
        method: PushMethod,
    },
}

/// HTTP verb used when pushing an output payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushMethod {
    /// POST the payload.
    #[default]
    Post,
    /// PUT the payload.
    Put,
}

/// How entity writes treat existing records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WriteMode {
    /// Always insert new records.
    #[default]
    Create,
    /// Update records matched by the update key.
    Update,
    /// Update matched records, insert the rest.
    CreateOrUpdate,
}

impl WriteMode {
    /// Returns whether this mode matches against existing records.
    pub const fn requires_update_key(&self) -> bool {
        matches!(self, Self::Update | Self::CreateOrUpdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_destination_never_serializes_output() {
        let to = ToDef::entity("orders", "/orders");
        let json = serde_json::to_value(&to).unwrap();
        assert_eq!(json["type"], "entity");
        assert!(json.get("output").is_none());
    }

    #[test]
    fn test_entity_destination_drops_stray_output_on_parse() {
        let json = serde_json::json!({
            "type": "entity",
            "output": {"mode": "api"},
            "entity_definition": "orders",
            "path": "/orders",
            "mode": "create",
            "mapping": {}
        });
        let to: ToDef = serde_json::from_value(json).unwrap();
        let round = serde_json::to_value(&to).unwrap();
        assert!(round.get("output").is_none());
    }

    #[test]
    fn test_format_destination_defaults() {
        let json = serde_json::json!({"type": "format"});
        let to: ToDef = serde_json::from_value(json).unwrap();
        assert_eq!(to, ToDef::default());
    }

    #[test]
    fn test_output_mode_push_wire_shape() {
        let output = OutputMode::Push {
            destination: "https://example.com/hook".into(),
            method: PushMethod::Put,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["mode"], "push");
        assert_eq!(json["method"], "put");
    }

    #[test]
    fn test_write_mode_names() {
        let name: &'static str = WriteMode::CreateOrUpdate.into();
        assert_eq!(name, "create_or_update");
        assert!(WriteMode::CreateOrUpdate.requires_update_key());
        assert!(!WriteMode::Create.requires_update_key());
    }
}
