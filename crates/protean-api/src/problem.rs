//! Client-side error taxonomy for failed API calls.
//!
//! Failures are categorized first by HTTP status; when no status is
//! available (the request never reached the server) or the status is
//! ambiguous, the response message is pattern-matched as a fallback.
//! Validation failures additionally carry per-field violations, folded into
//! a field-to-message dictionary for form display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::IntoStaticStr;
use thiserror::Error;

/// Category of a failed API call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// The submitted data failed validation.
    Validation,
    /// The request conflicts with existing state.
    Conflict,
    /// The caller is not authenticated.
    Authentication,
    /// The caller lacks permission.
    Permission,
    /// The resource does not exist.
    NotFound,
    /// The request never reached the server.
    Network,
    /// The server failed.
    Server,
    /// Anything else.
    Unknown,
}

impl ProblemKind {
    /// Categorizes by HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Permission,
            404 => Self::NotFound,
            409 => Self::Conflict,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    /// Categorizes a failure from its status and message.
    ///
    /// The status wins when it maps to a category; otherwise the message is
    /// pattern-matched best-effort. No status means the request never got a
    /// response.
    pub fn classify(status: Option<u16>, message: &str) -> Self {
        match status {
            Some(status) => match Self::from_status(status) {
                Self::Unknown => Self::from_message(message),
                kind => kind,
            },
            None => Self::Network,
        }
    }

    fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("already exists") || message.contains("duplicate") {
            Self::Conflict
        } else if message.contains("not found") {
            Self::NotFound
        } else if message.contains("unauthorized") || message.contains("expired") {
            Self::Authentication
        } else if message.contains("permission") || message.contains("forbidden") {
            Self::Permission
        } else if message.contains("network")
            || message.contains("timeout")
            || message.contains("connection")
        {
            Self::Network
        } else if message.contains("invalid") || message.contains("required") {
            Self::Validation
        } else {
            Self::Unknown
        }
    }

    /// Maps the category into the core error taxonomy.
    pub fn error_kind(&self) -> protean_core::ErrorKind {
        match self {
            Self::Validation => protean_core::ErrorKind::Validation,
            Self::Conflict => protean_core::ErrorKind::Conflict,
            Self::Authentication => protean_core::ErrorKind::Authentication,
            Self::Permission => protean_core::ErrorKind::Permission,
            Self::NotFound => protean_core::ErrorKind::NotFound,
            Self::Network => protean_core::ErrorKind::Network,
            Self::Server => protean_core::ErrorKind::Internal,
            Self::Unknown => protean_core::ErrorKind::Unknown,
        }
    }
}

/// One per-field violation reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field the violation applies to.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

/// Per-field violations folded into a field-to-message dictionary.
///
/// The first violation reported for a field wins; forms show one message
/// per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldViolations(HashMap<String, String>);

impl FieldViolations {
    /// Folds a violation list into the dictionary.
    pub fn from_violations(violations: impl IntoIterator<Item = Violation>) -> Self {
        let mut map = HashMap::new();
        for violation in violations {
            map.entry(violation.field).or_insert(violation.message);
        }
        Self(map)
    }

    /// Returns the message for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the number of violated fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no field is violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over (field, message) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A categorized API failure, ready for display.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiProblem {
    /// Failure category.
    pub kind: ProblemKind,
    /// Human-readable summary.
    pub message: String,
    /// Per-field violations, empty unless the backend reported them.
    #[serde(default)]
    pub violations: FieldViolations,
}

impl ApiProblem {
    /// Builds a problem from a response status, message, and violations.
    pub fn from_parts(
        status: Option<u16>,
        message: impl Into<String>,
        violations: impl IntoIterator<Item = Violation>,
    ) -> Self {
        let message = message.into();
        Self {
            kind: ProblemKind::classify(status, &message),
            message,
            violations: FieldViolations::from_violations(violations),
        }
    }

    /// Builds a problem from a failed envelope body.
    ///
    /// Reads the envelope's `message` and any `data.violations` list,
    /// tolerating missing or malformed sections.
    pub fn from_envelope(status: Option<u16>, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_owned();
        let violations = body
            .get("data")
            .and_then(|data| data.get("violations"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect::<Vec<Violation>>()
            })
            .unwrap_or_default();
        Self::from_parts(status, message, violations)
    }

    /// Builds a problem for a request that never got a response.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ProblemKind::Network,
            message: message.into(),
            violations: FieldViolations::default(),
        }
    }

    /// Returns the category as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}

impl From<ApiProblem> for protean_core::Error {
    fn from(problem: ApiProblem) -> Self {
        let kind = problem.kind.error_kind();
        protean_core::Error::new(kind).with_message(problem.message)
    }
}
