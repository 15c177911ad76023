//! The uniform response envelope returned by platform endpoints.

use serde::{Deserialize, Serialize};

use crate::pagination::PageMeta;

/// Outcome reported by a response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// The request succeeded.
    Success,
    /// The request failed; `message` describes why.
    Error,
}

/// The uniform `{status, message, data, meta?}` envelope wrapping every
/// response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Outcome of the request.
    pub status: ResponseStatus,
    /// Human-readable summary.
    pub message: String,
    /// Response payload, absent on errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Pagination metadata for list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ApiEnvelope<T> {
    /// Creates a success envelope around a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            meta: None,
        }
    }

    /// Creates an error envelope with no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            meta: None,
        }
    }

    /// Attaches pagination metadata.
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns whether the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Consumes the envelope, returning its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = ApiEnvelope::success("ok", vec![1, 2, 3]);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"], json!([1, 2, 3]));
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let envelope = ApiEnvelope::<()>::error("workflow not found");
        assert!(!envelope.is_success());
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_envelope_parse_with_meta() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_value(json!({
            "status": "success",
            "message": "listed",
            "data": ["a", "b"],
            "meta": {
                "total": 12, "page": 1, "per_page": 10,
                "total_pages": 2, "has_previous": false, "has_next": true
            }
        }))
        .unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.meta.unwrap().total_pages, 2);
        assert_eq!(envelope.into_data().unwrap().len(), 2);
    }
}
