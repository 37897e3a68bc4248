//! Edge in the normalized code property graph.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A directed edge recovered from a GraphSON document.
///
/// `src`/`dst` are stringified out/in vertex ids; either may be absent when no
/// recognized endpoint key matched. Endpoints are never validated against the
/// node set — dangling references pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub label: Option<String>,
    pub src: Option<String>,
    pub dst: Option<String>,
    pub properties: PropertyMap,
    pub raw: Value,
}

impl GraphEdge {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            src: None,
            dst: None,
            properties: PropertyMap::new(),
            raw: Value::Null,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_endpoints(
        mut self,
        src: impl Into<String>,
        dst: impl Into<String>,
    ) -> Self {
        self.src = Some(src.into());
        self.dst = Some(dst.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// An edge missing either endpoint.
    pub fn is_dangling(&self) -> bool {
        self.src.is_none() || self.dst.is_none()
    }
}
