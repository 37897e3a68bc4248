//! # graphson-llm — GraphSON Code Property Graphs for LLM Consumption
//!
//! Normalizes a GraphSON-encoded property graph (the TinkerPop/Gremlin
//! serialization emitted by `joern-export --format graphson`) into a
//! label-indexed, property-flattened model, then renders it as a structured
//! JSON document and two flat text tables built for text/LLM pipelines.
//!
//! ## Design Principles
//!
//! 1. **Heuristic, not schema-driven**: vertices and edges are discovered by
//!    type-tag substrings inside any nested list — no fixed GraphSON layout
//!    is assumed, and no exporter version is special-cased.
//! 2. **Clean DTOs**: `GraphNode`, `GraphEdge`, `Value` cross all boundaries.
//! 3. **Decoder owns nothing**: raw tree → entities is a pure function.
//! 4. **Absent data is never an error**: missing ids, labels, endpoints, and
//!    properties default; edges are not validated against node ids.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphson_llm::CpgGraph;
//!
//! # fn example() -> graphson_llm::Result<()> {
//! let raw: serde_json::Value = serde_json::from_str(r#"{"vertices": [
//!     {"@type": "g:Vertex", "@value": {"id": 1, "label": "METHOD"}}
//! ]}"#)?;
//!
//! let graph = CpgGraph::from_graphson(&raw);
//! assert_eq!(graph.node_count(), 1);
//!
//! let mut out = Vec::new();
//! graphson_llm::export::write_node_table(&mut out, &graph.nodes)?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod decode;
pub mod index;
pub mod layers;
pub mod token;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{GraphEdge, GraphNode, PropertyMap, Value};

// ============================================================================
// Re-exports: Pipeline stages
// ============================================================================

pub use decode::{TagVocabulary, scan, scan_with, unwrap};
pub use index::{GraphIndices, build_indices};
pub use layers::{LayerHints, classify};
pub use token::{EMPTY_TOKEN, code_token, stringify_any};

// ============================================================================
// Top-level graph handle
// ============================================================================

/// The primary entry point. A `CpgGraph` holds the normalized entities plus
/// the derived indices and layer hints, all built in one pass over the input
/// document and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct CpgGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub indices: GraphIndices,
    pub layer_hints: LayerHints,
}

impl CpgGraph {
    /// Normalize a parsed GraphSON tree with the default tag vocabulary.
    pub fn from_graphson(root: &serde_json::Value) -> Self {
        let (nodes, edges) = decode::scan(root);
        Self::from_parts(nodes, edges)
    }

    /// Normalize with a custom vertex/edge tag vocabulary.
    pub fn from_graphson_with(root: &serde_json::Value, vocab: &TagVocabulary) -> Self {
        let (nodes, edges) = decode::scan_with(root, vocab);
        Self::from_parts(nodes, edges)
    }

    fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        let indices = index::build_indices(&nodes);
        let layer_hints = layers::classify(&edges);
        Self { nodes, edges, indices, layer_hints }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node by id (last-seen wins on duplicate ids).
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.indices.node(id)
    }

    /// Ids of all nodes carrying the given label, in insertion order.
    pub fn ids_with_label(&self, label: &str) -> &[String] {
        self.indices.ids_with_label(label)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
