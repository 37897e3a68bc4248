//! `@type`/`@value` envelope stripping.

use serde_json::Value as Json;

use crate::model::Value;

/// Recursively remove GraphSON type envelopes, outermost first.
///
/// - A mapping with exactly one key `@value` unwraps to its unwrapped value.
/// - A mapping carrying both `@type` and `@value` (other keys irrelevant)
///   unwraps to the unwrapped `@value`; the type tag is discarded, so callers
///   that need it must read it before unwrapping.
/// - Any other mapping unwraps element-wise, keys and key order untouched.
/// - Sequences unwrap element-wise; scalars pass through.
///
/// Idempotent: unwrapping an already-plain tree changes nothing. Recursion
/// depth is bounded only by the input nesting depth.
pub fn unwrap(raw: &Json) -> Value {
    match raw {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or_default()),
        },
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::List(items.iter().map(unwrap).collect()),
        Json::Object(map) => {
            let enveloped = (map.len() == 1 && map.contains_key("@value"))
                || (map.contains_key("@type") && map.contains_key("@value"));
            if enveloped {
                return unwrap(&map["@value"]);
            }
            Value::Map(map.iter().map(|(k, v)| (k.clone(), unwrap(v))).collect())
        }
    }
}
