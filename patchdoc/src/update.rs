//! Flattened field updates
//!
//! Flat mapping of dot-joined field paths to replacement values,
//! meant to be handed to a document store's field-level update
//! primitive.
//!
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::node::{Map, Node};
use crate::path::FieldPath;

/// Flat path to value mapping produced by [`flatten`](crate::flatten)
///
/// Iteration order is sorted by path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldUpdates(BTreeMap<String, Node>);

impl FieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&Node> {
        self.0.get(path)
    }

    pub fn insert(&mut self, path: String, value: Node) -> Option<Node> {
        self.0.insert(path, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.0.iter()
    }

    /// Render as a flat JSON object keyed by dot paths
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect(),
        )
    }

    /// Apply each field update to `doc`
    ///
    /// Behaves like a store's field-level update: intermediate objects
    /// are created on demand, a non-object intermediate is replaced by
    /// a fresh object and the addressed field is overwritten.
    ///
    /// Fails only on an unparsable path key, which cannot happen for
    /// mappings produced by [`flatten`](crate::flatten).
    pub fn apply(&self, doc: &mut Node) -> Result<()> {
        for (key, value) in &self.0 {
            let path: FieldPath = key.parse()?;
            set_field(doc, &path, value.clone());
        }
        Ok(())
    }
}

fn set_field(doc: &mut Node, path: &FieldPath, value: Node) {
    let (parents, last) = path.split_last();

    let mut node = doc;
    for segment in parents {
        if !node.is_object() {
            *node = Node::Object(Map::new());
        }
        node = node
            .as_object_mut()
            .unwrap()
            .entry(segment.clone())
            .or_insert(Node::Null);
    }
    if !node.is_object() {
        *node = Node::Object(Map::new());
    }
    node.as_object_mut().unwrap().insert(last.clone(), value);
}

impl IntoIterator for FieldUpdates {
    type Item = (String, Node);
    type IntoIter = std::collections::btree_map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<BTreeMap<String, Node>> for FieldUpdates {
    fn from(map: BTreeMap<String, Node>) -> Self {
        Self(map)
    }
}

impl From<FieldUpdates> for BTreeMap<String, Node> {
    fn from(updates: FieldUpdates) -> Self {
        updates.0
    }
}

impl Serialize for FieldUpdates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
