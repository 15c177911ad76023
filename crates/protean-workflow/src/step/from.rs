//! Source definition types for a pipeline step.

use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;
use super::filter::EntityFilter;
use super::format::FormatConfig;
use crate::mapping::Mapping;

/// Where a pipeline step reads its data from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FromDef {
    /// Read records from a formatted payload (fetched or posted in).
    Format {
        /// Where the payload comes from.
        #[serde(default)]
        source: SourceDef,
        /// How the payload is parsed.
        #[serde(default = "FormatConfig::csv")]
        format: FormatConfig,
        /// Field renames applied to parsed records.
        #[serde(default)]
        mapping: Mapping,
    },
    /// Read records of a stored dynamic entity.
    Entity {
        /// Name of the entity definition to read.
        entity_definition: String,
        /// Optional row filter.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<EntityFilter>,
        /// Field renames applied to read records.
        #[serde(default)]
        mapping: Mapping,
    },
}

impl FromDef {
    /// Creates an entity source for the named entity definition.
    pub fn entity(entity_definition: impl Into<String>) -> Self {
        Self::Entity {
            entity_definition: entity_definition.into(),
            filter: None,
            mapping: Mapping::new(),
        }
    }

    /// Returns the field mapping for this source.
    pub fn mapping(&self) -> &Mapping {
        match self {
            Self::Format { mapping, .. } | Self::Entity { mapping, .. } => mapping,
        }
    }
}

impl Default for FromDef {
    fn default() -> Self {
        Self::Format {
            source: SourceDef::default(),
            format: FormatConfig::csv(),
            mapping: Mapping::new(),
        }
    }
}

/// Where a formatted payload is obtained.
///
/// The `api` source means the workflow itself accepts an inbound POST; it
/// therefore carries no caller-supplied endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source_type", rename_all = "snake_case")]
pub enum SourceDef {
    /// Fetch the payload from a remote uri.
    Uri {
        /// Fetch configuration.
        #[serde(default)]
        config: UriSourceConfig,
        /// Authentication used for the fetch.
        #[serde(default)]
        auth: AuthConfig,
    },
    /// Accept the payload as an inbound POST to this workflow.
    Api {
        /// Inbound configuration.
        #[serde(default)]
        config: ApiSourceConfig,
        /// Authentication required from the caller.
        #[serde(default)]
        auth: AuthConfig,
    },
}

impl SourceDef {
    /// Creates a uri source for the given address.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri {
            config: UriSourceConfig {
                uri: Some(uri.into()),
            },
            auth: AuthConfig::None,
        }
    }

    /// Returns the source kind as a string.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Uri { .. } => "uri",
            Self::Api { .. } => "api",
        }
    }

    /// Returns the authentication config for this source.
    pub fn auth(&self) -> &AuthConfig {
        match self {
            Self::Uri { auth, .. } | Self::Api { auth, .. } => auth,
        }
    }
}

impl Default for SourceDef {
    fn default() -> Self {
        Self::Uri {
            config: UriSourceConfig::default(),
            auth: AuthConfig::None,
        }
    }
}

/// Configuration for a uri source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriSourceConfig {
    /// Address the payload is fetched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Configuration for an inbound api source.
///
/// Intentionally empty: the platform assigns the inbound address when the
/// workflow is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSourceConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::FormatType;

    #[test]
    fn test_from_def_entity_wire_shape() {
        let from = FromDef::entity("orders");
        let json = serde_json::to_value(&from).unwrap();
        assert_eq!(json["type"], "entity");
        assert_eq!(json["entity_definition"], "orders");
        assert!(json.get("filter").is_none());
    }

    #[test]
    fn test_source_def_defaults_missing_fields() {
        let json = serde_json::json!({"source_type": "uri"});
        let source: SourceDef = serde_json::from_value(json).unwrap();
        assert_eq!(source, SourceDef::default());
    }

    #[test]
    fn test_api_source_ignores_unknown_config_keys() {
        let json = serde_json::json!({
            "source_type": "api",
            "config": {"endpoint": "/ignored"}
        });
        let source: SourceDef = serde_json::from_value(json).unwrap();
        let round = serde_json::to_value(&source).unwrap();
        assert!(round["config"].get("endpoint").is_none());
    }

    #[test]
    fn test_from_def_format_defaults_to_csv() {
        let json = serde_json::json!({"type": "format"});
        let from: FromDef = serde_json::from_value(json).unwrap();
        match from {
            FromDef::Format { format, .. } => assert_eq!(format.format_type, FormatType::Csv),
            other => panic!("unexpected from: {other:?}"),
        }
    }
}
