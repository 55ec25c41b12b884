//! Path-flattening merge builder
//!
//! Converts a partial update tree into a flat mapping of dot paths
//! to values, suitable for a field-level database update.
//!
use crate::node::Node;
use crate::update::FieldUpdates;

/// Flatten a partial update tree into dot-path field updates
///
/// `Null` branches contribute nothing, at any depth; falsy leaves
/// (`false`, `0`, `""`) are emitted. Arrays and timestamps are leaves:
/// they are emitted as-is and never descended into. An object whose
/// children are all ineligible contributes no keys at all.
///
/// A non-object root yields an empty mapping since a bare leaf has
/// no key to attach to.
pub fn flatten(update: &Node) -> FieldUpdates {
    let mut updates = FieldUpdates::new();
    if let Node::Object(map) = update {
        for (key, value) in map {
            flatten_into(&mut updates, key.clone(), value);
        }
    }
    log::debug!("Flattened update tree into {} field update(s)", updates.len());
    updates
}

fn flatten_into(updates: &mut FieldUpdates, prefix: String, node: &Node) {
    match node {
        Node::Null => (),
        Node::Object(map) => {
            for (key, value) in map {
                flatten_into(updates, format!("{}.{}", prefix, key), value);
            }
        }
        leaf => {
            updates.insert(prefix, leaf.clone());
        }
    }
}
