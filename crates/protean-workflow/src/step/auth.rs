//! Authentication configuration for step sources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authentication used when fetching a payload, or required from callers
/// posting one in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication.
    #[default]
    None,
    /// Static API key sent in a request header.
    ApiKey {
        /// The key value.
        key: String,
        /// Header the key is sent in.
        header_name: String,
    },
    /// HTTP basic auth.
    BasicAuth {
        /// Username.
        username: String,
        /// Password.
        password: String,
    },
    /// Pre-shared key carried in the request.
    PreSharedKey {
        /// The key value.
        key: String,
        /// Where the key is carried.
        location: KeyLocation,
        /// Header or body field holding the key.
        field_name: String,
    },
    /// JWT issued by the platform, checked for required claims.
    EntityJwt {
        /// Claims the token must carry, with their expected values.
        #[serde(default)]
        required_claims: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Returns the auth kind as a string.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ApiKey { .. } => "api_key",
            Self::BasicAuth { .. } => "basic_auth",
            Self::PreSharedKey { .. } => "pre_shared_key",
            Self::EntityJwt { .. } => "entity_jwt",
        }
    }
}

/// Where a pre-shared key is carried in a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyLocation {
    /// In a request header.
    #[default]
    Header,
    /// In a body field.
    Body,
}
