//! Pipeline step definition types.
//!
//! This module contains serializable, frontend-friendly types describing one
//! stage of a workflow pipeline. These types are designed for:
//! - Easy serialization to/from JSON
//! - Frontend consumption and editing
//! - Storage in a workflow's persisted config
//!
//! Loosely-shaped or legacy payloads should be repaired into these types
//! using the [`crate::sanitize`] module before editing or persisting.

mod auth;
mod filter;
mod format;
mod from;
mod to;
mod transform;

pub use auth::{AuthConfig, KeyLocation};
pub use filter::{EntityFilter, FilterOperator};
pub use format::{FormatConfig, FormatOptions, FormatType};
pub use from::{ApiSourceConfig, FromDef, SourceDef, UriSourceConfig};
pub use to::{OutputMode, PushMethod, ToDef, WriteMode};
pub use transform::{ArithmeticOp, Operand, StringOperand, Transform};

use serde::{Deserialize, Serialize};

/// One stage of a workflow pipeline: a data source, an optional
/// transformation, and a data destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepDef {
    /// Where the stage reads data from.
    pub from: FromDef,
    /// Transformation applied between source and destination.
    #[serde(default)]
    pub transform: Transform,
    /// Where the stage writes data to.
    pub to: ToDef,
}

impl StepDef {
    /// Creates the freshly-initialized step the editor starts from:
    /// a uri/csv source, no transform, and an api/json output.
    pub fn new() -> Self {
        Self::default()
    }
}
