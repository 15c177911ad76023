//! Field-rename mappings between pipeline stages.

use std::collections::HashMap;

use derive_more::From;
use serde::{Deserialize, Serialize};

/// A field-rename dictionary applied when data crosses from one pipeline
/// stage's shape to the next.
///
/// Keys are field names in the incoming shape, values are the names they
/// take in the outgoing shape. The map is unordered; editors that need a
/// stable row order should use [`Mapping::pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(HashMap<String, String>);

/// A single mapping row as displayed by the step editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPair {
    /// Field name in the incoming shape.
    pub field: String,
    /// Field name in the outgoing shape.
    pub renamed: String,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from editor rows.
    ///
    /// Every pair is inserted, blank rows included; a later pair for the
    /// same field wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = MappingPair>) -> Self {
        pairs
            .into_iter()
            .map(|pair| (pair.field, pair.renamed))
            .collect()
    }

    /// Returns the mapping as editor rows, sorted by field name.
    pub fn pairs(&self) -> Vec<MappingPair> {
        let mut pairs: Vec<MappingPair> = self
            .0
            .iter()
            .map(|(field, renamed)| MappingPair {
                field: field.clone(),
                renamed: renamed.clone(),
            })
            .collect();
        pairs.sort_by(|a, b| a.field.cmp(&b.field));
        pairs
    }

    /// Inserts a rename, returning the previous target if one was set.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        renamed: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(field.into(), renamed.into())
    }

    /// Returns the renamed target for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the number of renames.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over (field, renamed) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MappingPair {
    /// Creates a new mapping row.
    pub fn new(field: impl Into<String>, renamed: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            renamed: renamed.into(),
        }
    }
}
