//! Collaboration edge with record provenance

use super::author::AuthorKey;
use serde::{Deserialize, Serialize};

/// An undirected collaboration between two distinct authors
///
/// `source`/`target` only record which endpoint was seen first; the edge
/// has no direction. `weight` always equals `titles.len()`, which is checked
/// again when an edge is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EdgeFields")]
pub struct Edge {
    /// First endpoint
    pub source: AuthorKey,
    /// Second endpoint
    pub target: AuthorKey,
    /// Number of shared records
    pub weight: u32,
    /// Titles of the shared records, in ingestion order
    pub titles: Vec<String>,
    /// Document identifiers of the shared records, in ingestion order
    pub doc_ids: Vec<String>,
}

impl Edge {
    /// Create an edge from its first shared record
    pub fn new(
        source: AuthorKey,
        target: AuthorKey,
        title: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            weight: 1,
            titles: vec![title.into()],
            doc_ids: vec![doc_id.into()],
        }
    }

    /// Record another shared record on this edge
    pub fn record(&mut self, title: impl Into<String>, doc_id: impl Into<String>) {
        self.titles.push(title.into());
        self.doc_ids.push(doc_id.into());
        self.weight += 1;
    }

    /// Whether the edge touches the given author
    pub fn touches(&self, key: &AuthorKey) -> bool {
        &self.source == key || &self.target == key
    }

    /// The endpoint opposite to `key`, if `key` is an endpoint
    pub fn other(&self, key: &AuthorKey) -> Option<&AuthorKey> {
        if &self.source == key {
            Some(&self.target)
        } else if &self.target == key {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// Unchecked wire form of [`Edge`]
#[derive(Deserialize)]
struct EdgeFields {
    source: AuthorKey,
    target: AuthorKey,
    weight: u32,
    titles: Vec<String>,
    doc_ids: Vec<String>,
}

impl TryFrom<EdgeFields> for Edge {
    type Error = String;

    fn try_from(fields: EdgeFields) -> Result<Self, Self::Error> {
        if fields.source == fields.target {
            return Err(format!("self-loop on {}", fields.source));
        }
        let records = fields.titles.len();
        if fields.weight as usize != records || fields.doc_ids.len() != records {
            return Err(format!(
                "weight {} does not match {} titles and {} doc ids",
                fields.weight,
                records,
                fields.doc_ids.len()
            ));
        }
        Ok(Self {
            source: fields.source,
            target: fields.target,
            weight: fields.weight,
            titles: fields.titles,
            doc_ids: fields.doc_ids,
        })
    }
}
