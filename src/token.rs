//! Code-token extraction — one short display string per node.
//!
//! Priority is data, not logic: each CPG label family has an ordered key list,
//! tried first-truthy-wins, with a generic recursive stringifier as the last
//! resort. `METHOD` nodes get a `()` suffix so call sites and definitions read
//! alike in the text view.

use crate::model::{GraphNode, PropertyMap, Value};

const METHOD_LABELS: &[&str] = &["METHOD", "METHOD_PARAMETER_IN", "METHOD_PARAMETER_OUT"];
const METHOD_KEYS: &[&str] = &["name", "fullName", "signature"];

const IDENTIFIER_LABELS: &[&str] = &["IDENTIFIER", "LOCAL", "FIELD_IDENTIFIER", "TYPE_REF"];
const IDENTIFIER_KEYS: &[&str] = &["name", "typeFullName", "fullName", "canonicalName"];

const LITERAL_LABELS: &[&str] = &["LITERAL", "MODIFIER"];
const LITERAL_KEYS: &[&str] = &["code", "name", "value"];

const CODE_ONLY_LABELS: &[&str] = &["BLOCK", "IFSTATEMENT", "CALL", "RETURN", "EXPRESSION"];

/// Key priority for the generic mapping fallback.
const FALLBACK_KEYS: &[&str] =
    &["code", "name", "typeFullName", "fullName", "signature", "canonicalName", "type"];

/// Placeholder when no property yields any text.
pub const EMPTY_TOKEN: &str = "<empty>";

/// Derive a short human-readable representation of a node.
///
/// Order: a truthy `code` property wins outright; then the label-specific key
/// lists; then [`stringify_any`] over every property value in document order;
/// finally the `<empty>` placeholder.
pub fn code_token(node: &GraphNode) -> String {
    let props = &node.properties;

    if let Some(code) = props.get("code") {
        if code.is_truthy() {
            return code.to_text();
        }
    }

    let label = node.label.as_deref().unwrap_or("");
    if METHOD_LABELS.contains(&label) {
        if let Some(text) = first_truthy(props, METHOD_KEYS) {
            return if label == "METHOD" { format!("{text}()") } else { text };
        }
    }
    if IDENTIFIER_LABELS.contains(&label) {
        if let Some(text) = first_truthy(props, IDENTIFIER_KEYS) {
            return text;
        }
    }
    if LITERAL_LABELS.contains(&label) {
        if let Some(text) = first_truthy(props, LITERAL_KEYS) {
            return text;
        }
    }
    if CODE_ONLY_LABELS.contains(&label) {
        if let Some(text) = first_truthy(props, &["code"]) {
            return text;
        }
    }

    for value in props.values() {
        let text = stringify_any(value);
        if !text.is_empty() {
            return text;
        }
    }
    EMPTY_TOKEN.to_owned()
}

fn first_truthy(props: &PropertyMap, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| props.get(*k).filter(|v| v.is_truthy()))
        .map(Value::to_text)
}

/// Best-effort text for an arbitrary property value.
///
/// Scalars stringify directly (null to the empty string). Sequences yield the
/// first element with any text. Mappings resolve a `value` field
/// unconditionally, then the first present non-null priority key
/// (unconditionally — even when its text comes back empty), then fall back to
/// the first entry with any text.
pub fn stringify_any(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => value.to_text(),
        Value::List(items) => items
            .iter()
            .map(stringify_any)
            .find(|s| !s.is_empty())
            .unwrap_or_default(),
        Value::Map(map) => {
            if let Some(inner) = map.get("value") {
                return stringify_any(inner);
            }
            for key in FALLBACK_KEYS {
                if let Some(inner) = map.get(*key) {
                    if !inner.is_null() {
                        return stringify_any(inner);
                    }
                }
            }
            map.values()
                .map(stringify_any)
                .find(|s| !s.is_empty())
                .unwrap_or_default()
        }
    }
}
