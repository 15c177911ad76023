//! Workflow config payloads and records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::WorkflowResult;
use crate::sanitize::sanitize_steps;
use crate::step::StepDef;

/// The persisted configuration of a workflow: its pipeline steps in order.
///
/// This is the `config` payload sent when creating or updating a workflow
/// resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Pipeline steps, executed in order.
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

impl WorkflowConfig {
    /// Creates a config from the given steps.
    pub fn new(steps: Vec<StepDef>) -> Self {
        Self { steps }
    }

    /// Parses a config payload, requiring it to match the current shape.
    pub fn from_value(value: Value) -> WorkflowResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Repairs a loosely-shaped config payload.
    ///
    /// The steps array is sanitized element-wise; anything that is not an
    /// array of steps yields an empty config.
    pub fn from_value_lenient(value: &Value) -> Self {
        let steps = value.get("steps").map(sanitize_steps).unwrap_or_default();
        Self { steps }
    }

    /// Serializes the config to a JSON payload.
    pub fn to_value(&self) -> WorkflowResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether the config has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A workflow resource as returned by the platform API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// Unique workflow identifier.
    pub id: Uuid,
    /// Workflow name.
    pub name: String,
    /// Workflow description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the workflow accepts runs.
    #[serde(default)]
    pub enabled: bool,
    /// The pipeline configuration.
    #[serde(default)]
    pub config: WorkflowConfig,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
}
