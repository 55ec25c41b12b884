//! Document tree
//!
//! Defines the tree over which partial updates operate
//!
use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

use crate::errors::Result;

/// Mapping type used for object nodes
pub type Map = BTreeMap<String, Node>;

/// A JSON-like document tree
///
/// Only `Object` is composite: arrays and timestamps are opaque leaves
/// for both the flattener and the merger. `Null` stands for "absent"
/// in a partial update tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<Node>),
    Object(Map),
}

impl Node {
    /// Parse a node from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str::<Value>(s)?.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Return the child node for `key` if this is an object
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }
}

//
// Conversions
//

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Object(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(n) => Value::Number(n),
            Node::String(s) => Value::String(s),
            Node::Timestamp(ts) => Value::String(ts.to_rfc3339()),
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n.into())
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Number(n.into())
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        // Non finite numbers have no JSON representation
        Number::from_f64(n).map_or(Node::Null, Node::Number)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<DateTime<Utc>> for Node {
    fn from(ts: DateTime<Utc>) -> Self {
        Node::Timestamp(ts)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Array(items)
    }
}

impl From<Map> for Node {
    fn from(map: Map) -> Self {
        Node::Object(map)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Timestamp(ts) => ts.serialize(serializer),
            Node::Array(items) => items.serialize(serializer),
            Node::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // No timestamp sniffing: a JSON string stays a string
        Value::deserialize(deserializer).map(Node::from)
    }
}
