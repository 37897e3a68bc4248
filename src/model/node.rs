//! Node in the normalized code property graph.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A vertex recovered from a GraphSON document.
///
/// `id` is the stringified vertex identifier; ids are not guaranteed unique
/// (the index keeps the last-seen node on collision). `raw` retains the fully
/// unwrapped vertex value for fallback inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: Option<String>,
    pub properties: PropertyMap,
    pub raw: Value,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            properties: PropertyMap::new(),
            raw: Value::Null,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
