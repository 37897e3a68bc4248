//! # GraphSON Decoding
//!
//! Heuristic recovery of vertices and edges from a Gremlin/Joern GraphSON
//! tree. Pure functions — no I/O, no state; the caller parses the JSON text
//! and hands in the raw `serde_json` tree.

pub mod envelope;
pub mod scan;

pub use envelope::unwrap;
pub use scan::{TagVocabulary, scan, scan_with};
