//! Deep merge of parsed configuration trees.
//!
//! Later trees win. Mappings are merged key by key; everything else
//! (sequences, strings, numbers, booleans, nulls) is replaced wholesale.

use serde_json::{Map, Value};

/// Deep merge two trees, with `overlay` taking precedence over `base`.
///
/// - Mappings are merged recursively: keys only in `base` are kept, keys only
///   in `overlay` are added, keys in both are merged again
/// - Sequences are replaced entirely, never concatenated or merged by index
/// - Any other pairing: `overlay` replaces `base`, including an explicit null
///
/// # Example
/// ```
/// use serde_json::json;
/// use layered_config::config::deep_merge;
///
/// let base = json!({
///     "database": { "host": "mysql", "port": 3306 },
///     "dependencies": ["mysql", "redis"]
/// });
/// let overlay = json!({
///     "database": { "host": "127.0.0.1" },
///     "dependencies": ["sqlite"]
/// });
/// let merged = deep_merge(base, overlay);
/// assert_eq!(merged, json!({
///     "database": { "host": "127.0.0.1", "port": 3306 },
///     "dependencies": ["sqlite"]
/// }));
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merge multiple trees in order, with later trees taking precedence.
///
/// Folds [`deep_merge`] over the list starting from an empty mapping, so
/// an empty input yields `{}`.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values
        .into_iter()
        .fold(Value::Object(Map::new()), deep_merge)
}
