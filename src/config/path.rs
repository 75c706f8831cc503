//! Dotted key lookup over an untyped tree.
//!
//! `database.host` means: key `database` in the root mapping, then key `host`
//! in that. Segments are matched exactly. There is no escaping, no wildcard,
//! and no array indexing, so a sequence ends the walk.

use crate::error::{ConfigError, ConfigResult};

use super::Node;

/// Walk `key` through `tree` and return the node it points at.
///
/// Fails with `KeyNotFound` naming the whole key when a segment is missing or
/// the walk reaches something that is not a mapping.
pub fn resolve<'a>(tree: &'a Node, key: &str) -> ConfigResult<&'a Node> {
    key.split('.')
        .try_fold(tree, |node, segment| {
            node.as_object().and_then(|map| map.get(segment))
        })
        .ok_or_else(|| ConfigError::key_not_found(key))
}

/// Whether `key` resolves fully against `tree`.
pub fn contains(tree: &Node, key: &str) -> bool {
    resolve(tree, key).is_ok()
}
