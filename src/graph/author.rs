//! Author representation in the collaboration graph

use serde::{Deserialize, Serialize};

/// Stable identity of one author
///
/// Serializes as a plain string: either an external registry identifier
/// (e.g. an ORCID) or the cleaned name the author was first seen under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorKey(String);

impl AuthorKey {
    /// Create a key from a string
    pub fn from_string(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AuthorKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Where a stable key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrigin {
    /// External registry identifier supplied on the record
    External,
    /// Minted from the cleaned author name
    Name,
}

/// An author in the collaboration graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Stable identity
    pub key: AuthorKey,
    /// Name as first observed (cleaned, original casing)
    pub display_name: String,
    /// Number of records this author appears on
    pub paper_count: u32,
    /// How the key was assigned
    pub origin: KeyOrigin,
}

impl Author {
    /// Create a new author with no papers counted yet
    pub fn new(key: AuthorKey, display_name: impl Into<String>, origin: KeyOrigin) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            paper_count: 0,
            origin,
        }
    }

    /// Set the paper count
    pub fn with_paper_count(mut self, paper_count: u32) -> Self {
        self.paper_count = paper_count;
        self
    }
}
