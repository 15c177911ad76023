//! Repair of loosely-shaped step payloads.
//!
//! Payloads arriving from older clients or hand-edited configs do not always
//! match the current step shape: an entity destination may still carry the
//! `output` config of a prior format state, an inbound api source may carry
//! a caller-supplied endpoint, and optional sections may be missing
//! entirely. The functions here repair such payloads into valid
//! [`StepDef`] values, defaulting every gap. They repair, they do not
//! reject: the only error is an input that is not a JSON object at all.

use serde_json::Value;

use crate::TRACING_TARGET;
use crate::error::{WorkflowError, WorkflowResult};
use crate::mapping::Mapping;
use crate::step::{
    ApiSourceConfig, AuthConfig, FormatConfig, FormatOptions, FormatType, FromDef, OutputMode,
    PushMethod, SourceDef, StepDef, ToDef, Transform, UriSourceConfig, WriteMode,
};

/// Repairs one step payload into a valid [`StepDef`].
///
/// Missing or unrecognized sections are replaced with their defaults:
/// a format `from` gets a uri source and csv format, a format `to` gets an
/// api output and json format, and the transform falls back to `none`.
/// Entity destinations lose any stray `output` config; api sources lose any
/// caller-supplied `endpoint`.
///
/// # Errors
///
/// Returns [`WorkflowError::NotAnObject`] when `value` is not a JSON object.
pub fn sanitize_step(value: &Value) -> WorkflowResult<StepDef> {
    let Some(obj) = value.as_object() else {
        return Err(WorkflowError::NotAnObject);
    };
    Ok(StepDef {
        from: sanitize_from(obj.get("from")),
        transform: sanitize_transform(obj.get("transform")),
        to: sanitize_to(obj.get("to")),
    })
}

/// Repairs an array of step payloads.
///
/// Non-array input yields an empty vec. Array elements that are not objects
/// have nothing to preserve and become the default step.
pub fn sanitize_steps(value: &Value) -> Vec<StepDef> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| sanitize_step(item).unwrap_or_default())
        .collect()
}

/// Fills in the default csv options on either side of a step whose format
/// is csv with no options set. Idempotent.
pub fn ensure_csv_options(step: &mut StepDef) {
    if let FromDef::Format { format, .. } = &mut step.from {
        apply_csv_defaults(format);
    }
    if let ToDef::Format { format, .. } = &mut step.to {
        apply_csv_defaults(format);
    }
}

fn apply_csv_defaults(format: &mut FormatConfig) {
    if format.format_type == FormatType::Csv && format.options.is_empty() {
        format.options = FormatOptions::csv_defaults();
    }
}

fn sanitize_from(value: Option<&Value>) -> FromDef {
    let Some(obj) = value.and_then(Value::as_object) else {
        return FromDef::default();
    };
    match obj.get("type").and_then(Value::as_str) {
        Some("entity") => FromDef::Entity {
            entity_definition: string_or_empty(obj.get("entity_definition")),
            filter: obj
                .get("filter")
                .and_then(|v| serde_json::from_value(v.clone()).ok()),
            mapping: sanitize_mapping(obj.get("mapping")),
        },
        _ => FromDef::Format {
            source: sanitize_source(obj.get("source")),
            format: sanitize_format(obj.get("format"), FormatConfig::csv),
            mapping: sanitize_mapping(obj.get("mapping")),
        },
    }
}

fn sanitize_source(value: Option<&Value>) -> SourceDef {
    let Some(obj) = value.and_then(Value::as_object) else {
        return SourceDef::default();
    };
    let auth = sanitize_auth(obj.get("auth"));
    let config = obj.get("config").and_then(Value::as_object);
    match obj.get("source_type").and_then(Value::as_str) {
        Some("api") => {
            if config.is_some_and(|c| c.contains_key("endpoint")) {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "dropping caller-supplied endpoint from api source"
                );
            }
            SourceDef::Api {
                config: ApiSourceConfig {},
                auth,
            }
        }
        _ => SourceDef::Uri {
            config: UriSourceConfig {
                uri: config
                    .and_then(|c| c.get("uri"))
                    .and_then(Value::as_str)
                    .map(str::to_owned),
            },
            auth,
        },
    }
}

fn sanitize_to(value: Option<&Value>) -> ToDef {
    let Some(obj) = value.and_then(Value::as_object) else {
        return ToDef::default();
    };
    match obj.get("type").and_then(Value::as_str) {
        Some("entity") => {
            if obj.contains_key("output") {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "dropping stray output config from entity destination"
                );
            }
            ToDef::Entity {
                entity_definition: string_or_empty(obj.get("entity_definition")),
                path: string_or_empty(obj.get("path")),
                mode: obj
                    .get("mode")
                    .and_then(|v| serde_json::from_value::<WriteMode>(v.clone()).ok())
                    .unwrap_or_default(),
                update_key: obj
                    .get("update_key")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                mapping: sanitize_mapping(obj.get("mapping")),
            }
        }
        _ => ToDef::Format {
            output: sanitize_output(obj.get("output")),
            format: sanitize_format(obj.get("format"), FormatConfig::json),
            mapping: sanitize_mapping(obj.get("mapping")),
        },
    }
}

fn sanitize_transform(value: Option<&Value>) -> Transform {
    value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

fn sanitize_output(value: Option<&Value>) -> OutputMode {
    let Some(obj) = value.and_then(Value::as_object) else {
        return OutputMode::default();
    };
    match obj.get("mode").and_then(Value::as_str) {
        Some("download") => OutputMode::Download,
        Some("push") => OutputMode::Push {
            destination: string_or_empty(obj.get("destination")),
            method: obj
                .get("method")
                .and_then(|v| serde_json::from_value::<PushMethod>(v.clone()).ok())
                .unwrap_or_default(),
        },
        _ => OutputMode::Api,
    }
}

fn sanitize_format(value: Option<&Value>, fallback: fn() -> FormatConfig) -> FormatConfig {
    value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_else(fallback)
}

fn sanitize_auth(value: Option<&Value>) -> AuthConfig {
    value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

fn sanitize_mapping(value: Option<&Value>) -> Mapping {
    let Some(obj) = value.and_then(Value::as_object) else {
        return Mapping::new();
    };
    obj.iter()
        .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_owned())))
        .collect()
}

fn string_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}
