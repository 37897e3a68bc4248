//! Label and id indices over the normalized node list.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::GraphNode;

/// Lookup structures derived from the node list in one linear pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphIndices {
    /// label → node ids, first-seen label order, insertion order within each
    /// group. Unlabeled nodes group under the literal key `"null"`.
    pub by_label: IndexMap<String, Vec<String>>,
    /// id → node. Ids are not unique by construction; on collision the
    /// last-seen node wins and earlier ones stay reachable only through the
    /// ordered node list.
    #[serde(skip)]
    pub node_map: HashMap<String, GraphNode>,
}

/// Group node ids by label and build the id lookup.
pub fn build_indices(nodes: &[GraphNode]) -> GraphIndices {
    let mut indices = GraphIndices::default();
    for node in nodes {
        let key = node.label.clone().unwrap_or_else(|| "null".to_owned());
        indices.by_label.entry(key).or_default().push(node.id.clone());
        indices.node_map.insert(node.id.clone(), node.clone());
    }
    indices
}

impl GraphIndices {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_map.get(id)
    }

    pub fn ids_with_label(&self, label: &str) -> &[String] {
        self.by_label.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}
