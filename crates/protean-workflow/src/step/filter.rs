//! Row filters for entity sources.

use serde::{Deserialize, Serialize};

/// Filter applied when reading records of an entity definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFilter {
    /// Field the filter compares.
    pub field: String,
    /// Comparison operator.
    #[serde(default)]
    pub operator: FilterOperator,
    /// Value compared against.
    pub value: serde_json::Value,
}

impl EntityFilter {
    /// Creates an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Eq,
            value: value.into(),
        }
    }
}

/// Comparison operators available in the entity filter row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal.
    #[default]
    Eq,
    /// Not equal.
    Neq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Substring or element containment.
    Contains,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_wire_shape() {
        let filter = EntityFilter::eq("status", "active");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"field": "status", "operator": "eq", "value": "active"})
        );
    }

    #[test]
    fn test_filter_operator_defaults_to_eq() {
        let filter: EntityFilter = serde_json::from_value(serde_json::json!({
            "field": "amount",
            "value": 10
        }))
        .unwrap();
        assert_eq!(filter.operator, FilterOperator::Eq);
    }
}
