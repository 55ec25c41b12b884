//! Field paths
//!
//! Dot-joined paths addressing a leaf in a document tree,
//! e.g. `organisationInfo.address.city`
//!
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// A non-empty sequence of field names
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Build a path from a single root field name
    pub fn root(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains('.') {
            return Err(Error::InvalidPath(name));
        }
        Ok(Self(vec![name]))
    }

    /// Return a new path extended with `name`
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Split into leading segments and the final one
    pub(crate) fn split_last(&self) -> (&[String], &String) {
        // Invariant: a FieldPath is never empty
        let (last, rest) = self.0.split_last().unwrap();
        (rest, last)
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.split('.').any(str::is_empty) {
            return Err(Error::InvalidPath(s.to_string()));
        }
        Ok(Self(s.split('.').map(str::to_string).collect()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
