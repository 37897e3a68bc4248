//! Semantic layer classification of edge labels.
//!
//! Joern and the older Gremlin CPG exporters use different edge vocabularies
//! for the same three layers (syntax tree, control flow, dependence). The
//! classifier buckets each distinct label by keyword containment so a
//! downstream consumer can tell the layers apart without knowing the exporter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::GraphEdge;

/// Keyword sets, tested in this order with first match winning.
///
/// `REACHING_DEF` appears in both the cfg and pdg sets; because cfg is tested
/// first it always classifies as cfg. That tie-break is part of the contract.
pub const AST_KEYWORDS: &[&str] = &["AST", "CONTAINS", "IS_AST_PARENT", "AST_EDGE"];
pub const CFG_KEYWORDS: &[&str] = &["CFG", "NEXT", "FLOWS_TO", "CFG_NEXT", "REACHING_DEF"];
pub const PDG_KEYWORDS: &[&str] = &["PDG", "REACHING_DEF", "DATA_DEP", "CONTROLS", "CONTROLS_EDGE"];

/// Distinct uppercased edge labels observed per layer (labels, not edge
/// instances). Sets serialize sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerHints {
    pub ast: BTreeSet<String>,
    pub cfg: BTreeSet<String>,
    pub pdg: BTreeSet<String>,
    pub other: BTreeSet<String>,
}

impl LayerHints {
    pub fn is_empty(&self) -> bool {
        self.ast.is_empty() && self.cfg.is_empty() && self.pdg.is_empty() && self.other.is_empty()
    }
}

/// Bucket each edge's uppercased label (empty string when null) into
/// ast/cfg/pdg by keyword containment, `other` when nothing matches.
pub fn classify(edges: &[GraphEdge]) -> LayerHints {
    let mut hints = LayerHints::default();
    for edge in edges {
        let label = edge.label.as_deref().unwrap_or("").to_uppercase();
        let bucket = if contains_any(&label, AST_KEYWORDS) {
            &mut hints.ast
        } else if contains_any(&label, CFG_KEYWORDS) {
            &mut hints.cfg
        } else if contains_any(&label, PDG_KEYWORDS) {
            &mut hints.pdg
        } else {
            &mut hints.other
        };
        bucket.insert(label);
    }
    hints
}

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| label.contains(k))
}
