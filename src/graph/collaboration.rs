//! CollaborationGraph: undirected weighted graph over resolved authors

use super::author::{Author, AuthorKey};
use super::edge::Edge;
use std::collections::HashMap;

/// Outcome of recording a shared record between two authors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    /// A new edge was created with weight 1
    Created,
    /// An existing edge gained one more shared record
    Reinforced,
    /// Nothing changed: self-pair or unknown endpoint
    Ignored,
}

/// Undirected collaboration graph
///
/// Authors and edges keep their insertion order, which makes neighbor
/// iteration and full scans deterministic. Built once per ingestion pass
/// and read-only for queries afterwards.
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    authors: Vec<Author>,
    index: HashMap<AuthorKey, usize>,
    edges: Vec<Edge>,
    /// Per author: (neighbor index, edge index) in edge creation order
    adjacency: Vec<Vec<(usize, usize)>>,
    /// Unordered pair (low, high) -> edge index
    pairs: HashMap<(usize, usize), usize>,
}

impl CollaborationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an author if its key is not present yet
    ///
    /// Returns true when the author was inserted. An existing author with the
    /// same key is left untouched.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.index.contains_key(&author.key) {
            return false;
        }
        self.index.insert(author.key.clone(), self.authors.len());
        self.authors.push(author);
        self.adjacency.push(Vec::new());
        true
    }

    /// Increment an author's paper count, returning the new count
    pub fn increment_papers(&mut self, key: &AuthorKey) -> Option<u32> {
        let ix = *self.index.get(key)?;
        let author = &mut self.authors[ix];
        author.paper_count += 1;
        Some(author.paper_count)
    }

    /// Record one shared record between two authors
    pub fn add_collaboration(
        &mut self,
        a: &AuthorKey,
        b: &AuthorKey,
        title: &str,
        doc_id: &str,
    ) -> EdgeUpdate {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return EdgeUpdate::Ignored;
        };
        if ia == ib {
            return EdgeUpdate::Ignored;
        }

        let pair = (ia.min(ib), ia.max(ib));
        if let Some(&e) = self.pairs.get(&pair) {
            self.edges[e].record(title, doc_id);
            return EdgeUpdate::Reinforced;
        }

        let e = self.edges.len();
        self.edges.push(Edge::new(a.clone(), b.clone(), title, doc_id));
        self.pairs.insert(pair, e);
        self.adjacency[ia].push((ib, e));
        self.adjacency[ib].push((ia, e));
        EdgeUpdate::Created
    }

    /// Get an author by key
    pub fn get_author(&self, key: &AuthorKey) -> Option<&Author> {
        self.index.get(key).map(|&ix| &self.authors[ix])
    }

    /// Whether the author exists
    pub fn contains(&self, key: &AuthorKey) -> bool {
        self.index.contains_key(key)
    }

    /// All authors in first-encountered order
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.iter()
    }

    /// All edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// The edge between two authors, in either orientation
    pub fn edge_between(&self, a: &AuthorKey, b: &AuthorKey) -> Option<&Edge> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.pairs
            .get(&(ia.min(ib), ia.max(ib)))
            .map(|&e| &self.edges[e])
    }

    /// Direct collaborators of an author with the connecting edge
    pub fn neighbors<'a>(
        &'a self,
        key: &AuthorKey,
    ) -> impl Iterator<Item = (&'a Author, &'a Edge)> + 'a {
        self.index.get(key).into_iter().flat_map(move |&ix| {
            self.adjacency[ix]
                .iter()
                .map(move |&(n, e)| (&self.authors[n], &self.edges[e]))
        })
    }

    /// Number of distinct collaborators
    pub fn degree(&self, key: &AuthorKey) -> usize {
        self.index
            .get(key)
            .map(|&ix| self.adjacency[ix].len())
            .unwrap_or(0)
    }

    /// Get the number of authors
    pub fn node_count(&self) -> usize {
        self.authors.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn index_of(&self, key: &AuthorKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn author_at(&self, ix: usize) -> &Author {
        &self.authors[ix]
    }

    pub(crate) fn edge_at(&self, e: usize) -> &Edge {
        &self.edges[e]
    }

    pub(crate) fn adjacent(&self, ix: usize) -> &[(usize, usize)] {
        &self.adjacency[ix]
    }
}
