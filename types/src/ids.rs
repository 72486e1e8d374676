//! Validated identifiers for graph nodes and question options.
//!
//! Ids arrive as free-form strings (content files, key bindings, external
//! callers), so both newtypes validate once at construction and are opaque
//! afterwards.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier `{0}` contains whitespace or control characters")]
    InvalidChar(String),
}

fn validate(raw: &str) -> Result<(), IdError> {
    if raw.is_empty() {
        return Err(IdError::Empty);
    }
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(IdError::InvalidChar(raw.to_string()));
    }
    Ok(())
}

/// Key of a node in the graph registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NodeId {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

// Lets `HashMap<NodeId, _>` be queried with a plain `&str`.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of an option, unique within its question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionId(String);

impl OptionId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OptionId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OptionId {
    type Error = IdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionId> for String {
    fn from(value: OptionId) -> Self {
        value.0
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_rejects_empty_and_whitespace() {
        assert_eq!(NodeId::new(""), Err(IdError::Empty));
        assert!(matches!(NodeId::new("q 1"), Err(IdError::InvalidChar(_))));
        assert!(matches!(NodeId::new("q1\n"), Err(IdError::InvalidChar(_))));
        assert_eq!(NodeId::new("q2a8a").unwrap().as_str(), "q2a8a");
    }

    #[test]
    fn option_id_rejects_control_chars() {
        assert!(OptionId::new("yes\u{1b}").is_err());
        assert!(OptionId::new("unsure").is_ok());
    }

    #[test]
    fn node_id_deserialize_validates() {
        let ok: NodeId = serde_json::from_str("\"iit\"").unwrap();
        assert_eq!(ok.to_string(), "iit");
        assert!(serde_json::from_str::<NodeId>("\"\"").is_err());
        assert!(serde_json::from_str::<NodeId>("\"two words\"").is_err());
    }

    #[test]
    fn node_id_borrows_as_str_for_lookups() {
        let mut map = std::collections::HashMap::new();
        map.insert(NodeId::new("q0").unwrap(), 1);
        assert_eq!(map.get("q0"), Some(&1));
    }
}
