//! Ordered indexes over a selected set of authors
//!
//! Callers build an index from an explicit entry list (typically an
//! author's collaborator queue) and query it in ascending key order. The
//! index is detached from the graph: deleting an entry never touches the
//! author registry.

mod bst;

pub use bst::ProductivityTree;

use crate::graph::AuthorKey;
use crate::query::Collaborator;
use serde::{Deserialize, Serialize};

/// One author placed in an ordered index, keyed by paper count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Ordering key (not unique)
    pub key: u32,
    pub identity: AuthorKey,
    pub display_name: String,
}

impl TreeEntry {
    pub fn new(key: u32, identity: AuthorKey, display_name: impl Into<String>) -> Self {
        Self {
            key,
            identity,
            display_name: display_name.into(),
        }
    }
}

impl From<&Collaborator> for TreeEntry {
    fn from(collaborator: &Collaborator) -> Self {
        Self::new(
            collaborator.author.paper_count,
            collaborator.author.key.clone(),
            collaborator.author.display_name.clone(),
        )
    }
}

/// An index yielding entries in ascending key order
///
/// Equal keys keep insertion order. Implementations may or may not
/// rebalance; callers only rely on ordering.
pub trait OrderedIndex: std::fmt::Debug + Send + Sync {
    /// Insert an entry
    fn insert(&mut self, entry: TreeEntry);

    /// Remove the entry with the given identity, if present
    fn delete(&mut self, identity: &AuthorKey) -> Option<TreeEntry>;

    /// Entries in ascending key order
    fn in_order(&self) -> Vec<&TreeEntry>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Number of levels (0 when empty)
    fn height(&self) -> usize;

    /// Whether the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an entry with the given identity is present
    fn contains(&self, identity: &AuthorKey) -> bool {
        self.in_order().iter().any(|entry| &entry.identity == identity)
    }
}
