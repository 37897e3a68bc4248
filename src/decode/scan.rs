//! Vertex/edge discovery and materialization.
//!
//! GraphSON exporters disagree on where entities live (top-level arrays,
//! `vertices`/`edges` fields, nested `@value` lists) and on which keys carry
//! edge endpoints. The scanner makes no schema assumptions: it collects every
//! sequence-valued field in the tree as a candidate list, classifies members
//! by type-tag substring, and materializes matches with defaulting on every
//! missing field. Scanning never fails.

use serde_json::Value as Json;
use tracing::debug;

use super::envelope::unwrap;
use crate::model::{GraphEdge, GraphNode, PropertyMap, Value};

/// Endpoint keys, in priority order. First non-null match wins.
const OUT_KEYS: &[&str] = &["out", "outV", "outVertex", "outId"];
const IN_KEYS: &[&str] = &["in", "inV", "inVertex", "inId"];

/// Keys that never become properties when an entity has no `properties` map.
const VERTEX_RESERVED: &[&str] = &["id", "label", "properties"];
const EDGE_RESERVED: &[&str] = &["id", "label", "out", "in", "outV", "inV", "properties"];

// ============================================================================
// Tag vocabulary
// ============================================================================

/// Substring markers that classify a candidate item as vertex- or edge-shaped.
///
/// Matching is case-sensitive containment against the item's type tag
/// (`@type`, else a string-valued `type` field). The default vocabulary
/// (`Vertex`/`Edge`) covers TinkerPop and Joern exports; other exporters'
/// vocabularies can be supplied without touching the traversal.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    vertex_markers: Vec<String>,
    edge_markers: Vec<String>,
}

impl TagVocabulary {
    pub fn new(
        vertex_markers: impl IntoIterator<Item = impl Into<String>>,
        edge_markers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            vertex_markers: vertex_markers.into_iter().map(Into::into).collect(),
            edge_markers: edge_markers.into_iter().map(Into::into).collect(),
        }
    }

    fn is_vertex(&self, tag: &str) -> bool {
        self.vertex_markers.iter().any(|m| tag.contains(m.as_str()))
    }

    fn is_edge(&self, tag: &str) -> bool {
        self.edge_markers.iter().any(|m| tag.contains(m.as_str()))
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        // NOTE: "VertexProperty" also contains "Vertex" — an accepted risk of
        // the substring heuristic.
        Self::new(["Vertex"], ["Edge"])
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Scan a raw GraphSON tree with the default `Vertex`/`Edge` vocabulary.
pub fn scan(root: &Json) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    scan_with(root, &TagVocabulary::default())
}

/// Scan a raw GraphSON tree for vertices and edges.
///
/// Discovery order is traversal order and is preserved into the output:
/// mappings are visited entry by entry (a sequence-valued entry becomes a
/// candidate list, then is recursed into), sequences element by element. When
/// no vertex turned up and the root itself is a sequence, the root's direct
/// elements are re-scanned for `@type`-tagged vertices — a vertex-only
/// fallback with no edge equivalent.
pub fn scan_with(root: &Json, vocab: &TagVocabulary) -> (Vec<GraphNode>, Vec<GraphEdge>) {
    let mut lists: Vec<&Vec<Json>> = Vec::new();
    collect_candidate_lists(root, &mut lists);

    let mut vertex_items: Vec<&Json> = Vec::new();
    let mut edge_items: Vec<&Json> = Vec::new();
    for list in &lists {
        for item in list.iter() {
            let Some(tag) = type_tag(item) else { continue };
            if vocab.is_vertex(tag) {
                vertex_items.push(item);
            } else if vocab.is_edge(tag) {
                edge_items.push(item);
            }
        }
    }

    if vertex_items.is_empty() {
        if let Json::Array(items) = root {
            for item in items {
                if let Some(tag) = item.get("@type").and_then(Json::as_str) {
                    if vocab.is_vertex(tag) {
                        vertex_items.push(item);
                    }
                }
            }
        }
    }

    let nodes: Vec<GraphNode> = vertex_items.into_iter().map(materialize_vertex).collect();
    let edges: Vec<GraphEdge> = edge_items.into_iter().map(materialize_edge).collect();
    debug!(
        candidate_lists = lists.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "graphson scan complete"
    );
    (nodes, edges)
}

/// Depth-first collection of every sequence held by a mapping field.
///
/// A root-level sequence is not itself a candidate list; only its nested
/// mapping fields contribute (the root fallback in `scan_with` covers the
/// bare-array case).
fn collect_candidate_lists<'a>(value: &'a Json, out: &mut Vec<&'a Vec<Json>>) {
    match value {
        Json::Object(map) => {
            for field in map.values() {
                if let Json::Array(items) = field {
                    out.push(items);
                }
                collect_candidate_lists(field, out);
            }
        }
        Json::Array(items) => {
            for item in items {
                collect_candidate_lists(item, out);
            }
        }
        _ => {}
    }
}

/// The classification tag of a candidate item: `@type`, else a string-valued
/// `type` field. Non-mapping items have no tag.
fn type_tag(item: &Json) -> Option<&str> {
    let map = item.as_object()?;
    map.get("@type")
        .and_then(Json::as_str)
        .or_else(|| map.get("type").and_then(Json::as_str))
}

// ============================================================================
// Materialization
// ============================================================================

/// The entity payload: the unwrapped `@value` when present, else the whole
/// item unwrapped (which keeps a lone `@type` key visible in `raw`).
fn payload(item: &Json) -> Value {
    match item.get("@value") {
        Some(inner) => unwrap(inner),
        None => unwrap(item),
    }
}

fn materialize_vertex(item: &Json) -> GraphNode {
    let val = payload(item);
    let (id, label, properties) = match &val {
        Value::Map(map) => (
            map.get("id").map(Value::to_text).unwrap_or_default(),
            map.get("label").and_then(Value::as_str).map(str::to_owned),
            match map.get("properties") {
                Some(Value::Map(props)) => reduce_vertex_properties(props),
                _ => fallback_properties(map, VERTEX_RESERVED),
            },
        ),
        scalar => (scalar.to_text(), None, PropertyMap::new()),
    };
    GraphNode { id, label, properties, raw: val }
}

fn materialize_edge(item: &Json) -> GraphEdge {
    let val = payload(item);
    let (id, label, src, dst, properties) = match &val {
        Value::Map(map) => (
            map.get("id").map(Value::to_text).unwrap_or_default(),
            map.get("label").and_then(Value::as_str).map(str::to_owned),
            endpoint(map, OUT_KEYS),
            endpoint(map, IN_KEYS),
            match map.get("properties") {
                // Edges keep one value per key as-is, no first-element reduction
                Some(Value::Map(props)) => props.clone(),
                _ => fallback_properties(map, EDGE_RESERVED),
            },
        ),
        _ => (String::new(), None, None, None, PropertyMap::new()),
    };
    GraphEdge { id, label, src, dst, properties, raw: val }
}

/// First non-null endpoint in priority order, stringified.
fn endpoint(map: &PropertyMap, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| map.get(*k).filter(|v| !v.is_null()))
        .map(Value::to_text)
}

/// Reduce multi-valued GraphSON vertex properties to one representative value
/// per key: the first element of each non-empty sequence. Keys whose value is
/// not a non-empty sequence are dropped.
fn reduce_vertex_properties(props: &PropertyMap) -> PropertyMap {
    let mut out = PropertyMap::new();
    for (key, value) in props {
        if let Value::List(values) = value {
            if let Some(first) = values.first() {
                out.insert(key.clone(), representative(first));
            }
        }
    }
    out
}

/// One representative value for a (possibly still wrapper-shaped) property
/// element: resolve a residual `@value` field, then a `value` field, else the
/// element itself.
fn representative(element: &Value) -> Value {
    let Value::Map(map) = element else {
        return element.clone();
    };
    let inner = map.get("@value").unwrap_or(element);
    match inner {
        Value::Map(m) => m.get("value").cloned().unwrap_or_else(|| inner.clone()),
        _ => inner.clone(),
    }
}

/// Property collection for entities without a `properties` mapping: every
/// non-reserved key becomes a property.
fn fallback_properties(map: &PropertyMap, reserved: &[&str]) -> PropertyMap {
    map.iter()
        .filter(|(k, _)| !reserved.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
