//! End-to-end tests for the full pipeline.
//!
//! Each test exercises: raw GraphSON tree -> scan -> indices/layer hints ->
//! export, against an inline Joern-style document with typed envelopes,
//! multi-valued vertex properties, and mixed edge endpoint keys.

use pretty_assertions::assert_eq;
use serde_json::json;

use graphson_llm::{CpgGraph, Value, export};

/// A small Joern-flavored GraphSON document: `main()` calling `f(x)` with a
/// local `x`, plus AST/CFG/PDG edges. Property elements carry scalar type
/// tags (`g:String`), the shape the flat-property exporter variants emit.
fn sample_graphson() -> serde_json::Value {
    json!({
        "@type": "tinker:graph",
        "@value": {
            "vertices": [
                {"@type": "g:Vertex", "@value": {
                    "id": {"@type": "g:Int64", "@value": 1},
                    "label": "METHOD",
                    "properties": {
                        "name": [{"@type": "g:String", "@value": "main"}],
                        "fullName": [{"@type": "g:String", "@value": "pkg.main"}]
                    }
                }},
                {"@type": "g:Vertex", "@value": {
                    "id": {"@type": "g:Int64", "@value": 2},
                    "label": "CALL",
                    "properties": {
                        "code": [{"@type": "g:String", "@value": "f(x)"}],
                        "name": [{"@type": "g:String", "@value": "f"}]
                    }
                }},
                {"@type": "g:Vertex", "@value": {
                    "id": {"@type": "g:Int64", "@value": 3},
                    "label": "LOCAL",
                    "properties": {
                        "name": [{"@type": "g:String", "@value": "x"}],
                        "typeFullName": [{"@type": "g:String", "@value": "int"}]
                    }
                }}
            ],
            "edges": [
                {"@type": "g:Edge", "@value": {
                    "id": {"@type": "g:Int32", "@value": 100},
                    "label": "AST",
                    "outV": {"@type": "g:Int64", "@value": 1},
                    "inV": {"@type": "g:Int64", "@value": 2},
                    "outVLabel": "METHOD",
                    "inVLabel": "CALL"
                }},
                {"@type": "g:Edge", "@value": {
                    "id": {"@type": "g:Int32", "@value": 101},
                    "label": "NEXT",
                    "out": {"@type": "g:Int64", "@value": 2},
                    "in": {"@type": "g:Int64", "@value": 3}
                }},
                {"@type": "g:Edge", "@value": {
                    "id": {"@type": "g:Int32", "@value": 102},
                    "label": "REACHING_DEF",
                    "outV": {"@type": "g:Int64", "@value": 3},
                    "inV": {"@type": "g:Int64", "@value": 2},
                    "properties": {
                        "VARIABLE": {"@type": "g:String", "@value": "x"}
                    }
                }}
            ]
        }
    })
}

// ============================================================================
// 1. Normalization: entities, ids, flattened properties
// ============================================================================

#[test]
fn test_normalizes_vertices_and_edges() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);

    let method = graph.node("1").unwrap();
    assert_eq!(method.label.as_deref(), Some("METHOD"));
    assert_eq!(method.get("name"), Some(&Value::String("main".into())));
    assert_eq!(method.get("fullName"), Some(&Value::String("pkg.main".into())));
}

#[test]
fn test_edge_endpoints_resolve_across_key_variants() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    let ast = &graph.edges[0];
    assert_eq!((ast.src.as_deref(), ast.dst.as_deref()), (Some("1"), Some("2")));

    // `out`/`in` variant resolves the same way
    let next = &graph.edges[1];
    assert_eq!((next.src.as_deref(), next.dst.as_deref()), (Some("2"), Some("3")));

    // edge properties are kept without first-element reduction
    let reach = &graph.edges[2];
    assert_eq!(reach.properties.get("VARIABLE"), Some(&Value::String("x".into())));
}

#[test]
fn test_label_index_groups_in_first_seen_order() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    let labels: Vec<&String> = graph.indices.by_label.keys().collect();
    assert_eq!(labels, ["METHOD", "CALL", "LOCAL"]);
    assert_eq!(graph.ids_with_label("CALL"), ["2"]);
    assert!(graph.ids_with_label("NO_SUCH_LABEL").is_empty());
}

#[test]
fn test_layer_hints_bucket_labels() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    assert!(graph.layer_hints.ast.contains("AST"));
    assert!(graph.layer_hints.cfg.contains("NEXT"));
    // REACHING_DEF ties to cfg, never pdg
    assert!(graph.layer_hints.cfg.contains("REACHING_DEF"));
    assert!(graph.layer_hints.pdg.is_empty());
    assert!(graph.layer_hints.other.is_empty());
}

// ============================================================================
// 2. Combined document export
// ============================================================================

#[test]
fn test_document_shape_and_meta() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    let mut buf = Vec::new();
    export::write_document(&mut buf, &graph, "juliet-cwe121").unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(doc["meta"]["source"], "juliet-cwe121");
    assert_eq!(doc["meta"]["original_format"], "graphson");
    assert_eq!(doc["meta"]["node_count"], 3);
    assert_eq!(doc["meta"]["edge_count"], 3);

    assert_eq!(doc["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(doc["edges"].as_array().unwrap().len(), 3);
    assert_eq!(doc["byLabel"]["METHOD"], json!(["1"]));
    assert_eq!(doc["layerHints"]["cfg"], json!(["NEXT", "REACHING_DEF"]));

    // nodes serialize flattened, with the raw value retained
    assert_eq!(doc["nodes"][0]["id"], "1");
    assert_eq!(doc["nodes"][0]["properties"]["name"], "main");
    assert_eq!(doc["nodes"][0]["raw"]["label"], "METHOD");
}

#[test]
fn test_empty_document_exports_zero_counts() {
    let graph = CpgGraph::from_graphson(&json!({}));
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);

    let mut buf = Vec::new();
    export::write_document(&mut buf, &graph, "").unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(doc["meta"]["node_count"], 0);
    assert_eq!(doc["nodes"], json!([]));
    assert_eq!(doc["byLabel"], json!({}));
}

// ============================================================================
// 3. Text tables
// ============================================================================

#[test]
fn test_node_table_lines() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    let mut buf = Vec::new();
    export::write_node_table(&mut buf, &graph.nodes).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text, "1\tMETHOD\tmain()\n2\tCALL\tf(x)\n3\tLOCAL\tx\n");
}

#[test]
fn test_edge_table_remaps_labels() {
    let graph = CpgGraph::from_graphson(&sample_graphson());

    let mut buf = Vec::new();
    export::write_edge_table(&mut buf, &graph.edges).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text, "1\t2\tIS_AST_PARENT\n2\t3\tFLOWS_TO\n3\t2\tREACHES\n");
}

// ============================================================================
// 4. Root-level vertex array (old exporter shape)
// ============================================================================

#[test]
fn test_bare_vertex_array_recovers_via_fallback() {
    let root = json!([
        {"@type": "g:Vertex", "@value": {"id": 1, "label": "METHOD"}},
        {"@type": "g:Vertex", "@value": {"id": 2, "label": "CALL"}},
        {"@type": "g:Edge", "@value": {"id": 3, "label": "AST", "outV": 1, "inV": 2}}
    ]);
    let graph = CpgGraph::from_graphson(&root);

    assert_eq!(graph.node_count(), 2);
    // the fallback has no edge equivalent
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.layer_hints.is_empty());
}

// ============================================================================
// 5. Known heuristic risk: g:VertexProperty elements match "Vertex"
// ============================================================================

#[test]
fn test_vertex_property_elements_become_extra_nodes() {
    // Full TinkerPop exports wrap each property element as g:VertexProperty;
    // the substring heuristic scoops those up as additional vertices. The
    // real vertex still comes first and keeps its reduced property.
    let root = json!({"vertices": [
        {"@type": "g:Vertex", "@value": {
            "id": 1,
            "label": "LOCAL",
            "properties": {
                "name": [{"@type": "g:VertexProperty", "@value": {
                    "id": 7, "value": "x", "label": "name"
                }}]
            }
        }}
    ]});
    let graph = CpgGraph::from_graphson(&root);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.nodes[0].label.as_deref(), Some("LOCAL"));
    assert_eq!(graph.nodes[0].get("name"), Some(&Value::String("x".into())));
    assert_eq!(graph.nodes[1].id, "7");
    assert_eq!(graph.nodes[1].label.as_deref(), Some("name"));
}

// ============================================================================
// 6. Dangling edges pass through
// ============================================================================

#[test]
fn test_dangling_edges_are_tolerated() {
    let root = json!({"cells": [
        {"@type": "g:Vertex", "@value": {"id": 1, "label": "BLOCK"}},
        {"@type": "g:Edge", "@value": {"id": 2, "label": "CDG", "outV": 1, "inV": 999}}
    ]});
    let graph = CpgGraph::from_graphson(&root);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges[0].dst.as_deref(), Some("999"));
    assert!(graph.node("999").is_none());

    let mut buf = Vec::new();
    export::write_edge_table(&mut buf, &graph.edges).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "1\t999\tCDG\n");
}
