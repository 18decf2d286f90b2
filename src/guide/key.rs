use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

/// Namespaced identifier for a guide group
///
/// Rendered as `namespace:key`, the convention hosts already use for
/// registry keys. Both halves are validated on construction, so a
/// `GroupKey` in hand is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GroupKey {
    namespace: String,
    key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("namespace '{0}' must be non-empty [a-z0-9._-]")]
    InvalidNamespace(String),
    #[error("key '{0}' must be non-empty [a-z0-9/._-]")]
    InvalidKey(String),
    #[error("expected 'namespace:key', got '{0}'")]
    MissingSeparator(String),
}

impl GroupKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let key = key.into();
        if namespace.is_empty() || !namespace.bytes().all(valid_namespace_byte) {
            return Err(KeyError::InvalidNamespace(namespace));
        }
        if key.is_empty() || !key.bytes().all(valid_key_byte) {
            return Err(KeyError::InvalidKey(key));
        }
        Ok(Self { namespace, key })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn valid_namespace_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'.' | b'_' | b'-')
}

// Keys additionally allow '/' for path-like grouping
fn valid_key_byte(b: u8) -> bool {
    valid_namespace_byte(b) || b == b'/'
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for GroupKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Err(KeyError::MissingSeparator(s.to_string())),
        }
    }
}

impl From<GroupKey> for String {
    fn from(key: GroupKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for GroupKey {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
