//! Recursive record merger
//!
//! Combines an existing record with a partial update tree, preserving
//! the existing record wherever the update supplies no value.
//!
use crate::node::{Map, Node};

/// Merge a partial update tree into `doc` in place
///
/// A `Null` update leaves the existing value untouched. When both
/// sides are objects they are merged field by field, with a `Null`
/// update field preserving the existing one. Anything else (primitives,
/// falsy values, arrays, timestamps) replaces the existing value
/// wholesale; arrays are never merged element-wise.
pub fn merge_into(doc: &mut Node, update: &Node) {
    if update.is_null() {
        return;
    }

    if !update.is_object() || !doc.is_object() {
        *doc = update.clone();
        return;
    }

    let map = doc.as_object_mut().unwrap();
    for (key, value) in update.as_object().unwrap() {
        match value {
            // Preserve the existing value
            Node::Null => (),
            Node::Object(_) => merge_into(
                map.entry(key.clone())
                    .or_insert_with(|| Node::Object(Map::new())),
                value,
            ),
            leaf => {
                map.insert(key.clone(), leaf.clone());
            }
        }
    }
}

/// Merge a partial update tree over an existing record
///
/// Returns a new record; neither input is mutated.
pub fn merge(existing: &Node, update: &Node) -> Node {
    let mut merged = existing.clone();
    merge_into(&mut merged, update);
    merged
}
