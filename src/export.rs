//! LLM-ready export — one combined JSON document plus two flat text tables.
//!
//! ```text
//! CpgGraph → write_document()   → {meta, nodes, edges, byLabel, layerHints}
//!          → write_node_table() → id \t label \t code_token
//!          → write_edge_table() → src \t dst \t mapped_label
//! ```
//!
//! The document field names and the table column orders are a consumer
//! contract (the LLM-context loader keys on them); the edge table rewrites
//! labels to one canonical vocabulary so mixed exporters produce one dialect.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::layers::LayerHints;
use crate::model::{GraphEdge, GraphNode};
use crate::token::code_token;
use crate::{CpgGraph, Result};

/// Canonical edge-label rewrite, keyed by uppercased label. Unmapped labels
/// pass through in their original case.
const EDGE_LABEL_MAP: &[(&str, &str)] = &[
    ("AST", "IS_AST_PARENT"),
    ("CONTAINS", "IS_AST_PARENT"),
    ("IS_AST_PARENT", "IS_AST_PARENT"),
    ("CFG", "FLOWS_TO"),
    ("NEXT", "FLOWS_TO"),
    ("FLOWS_TO", "FLOWS_TO"),
    ("REACHING_DEF", "REACHES"),
    ("CONTROLS", "CONTROLS"),
    ("DEF", "DEF"),
    ("USE", "USE"),
];

/// Rewrite an edge label to the canonical vocabulary.
pub fn mapped_label(label: Option<&str>) -> String {
    let label = label.unwrap_or("");
    let upper = label.to_uppercase();
    EDGE_LABEL_MAP
        .iter()
        .find(|(from, _)| *from == upper)
        .map(|(_, to)| (*to).to_owned())
        .unwrap_or_else(|| label.to_owned())
}

#[derive(Serialize)]
struct Meta<'a> {
    source: &'a str,
    original_format: &'static str,
    node_count: usize,
    edge_count: usize,
}

#[derive(Serialize)]
struct Document<'a> {
    meta: Meta<'a>,
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
    #[serde(rename = "byLabel")]
    by_label: &'a IndexMap<String, Vec<String>>,
    #[serde(rename = "layerHints")]
    layer_hints: &'a LayerHints,
}

/// Write the combined structured document as pretty-printed JSON.
///
/// `source` is an opaque label recorded verbatim in `meta.source`.
pub fn write_document(writer: &mut dyn Write, graph: &CpgGraph, source: &str) -> Result<()> {
    let doc = Document {
        meta: Meta {
            source,
            original_format: "graphson",
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
        },
        nodes: &graph.nodes,
        edges: &graph.edges,
        by_label: &graph.indices.by_label,
        layer_hints: &graph.layer_hints,
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the node table: `id\tlabel\tcode_token` per line, node order.
/// Unlabeled nodes print `UNKNOWN`.
pub fn write_node_table(writer: &mut dyn Write, nodes: &[GraphNode]) -> Result<()> {
    for node in nodes {
        writeln!(
            writer,
            "{}\t{}\t{}",
            node.id,
            node.label.as_deref().unwrap_or("UNKNOWN"),
            code_token(node),
        )?;
    }
    Ok(())
}

/// Write the edge table: `src\tdst\tmapped_label` per line, edge order.
/// Missing endpoints print as empty fields.
pub fn write_edge_table(writer: &mut dyn Write, edges: &[GraphEdge]) -> Result<()> {
    for edge in edges {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.src.as_deref().unwrap_or(""),
            edge.dst.as_deref().unwrap_or(""),
            mapped_label(edge.label.as_deref()),
        )?;
    }
    Ok(())
}
