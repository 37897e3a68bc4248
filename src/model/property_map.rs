//! PropertyMap — the key-value store on nodes and edges.

use indexmap::IndexMap;
use super::Value;

/// A map of property names to values, in document order.
pub type PropertyMap = IndexMap<String, Value>;

/// Convert iterator of (key, value) pairs into a map Value.
impl<K, V> From<Vec<(K, V)>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
