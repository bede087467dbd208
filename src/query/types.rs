//! Query types and result structures

use crate::graph::{Author, AuthorKey, Edge, KeyOrigin};
use serde::Serialize;
use thiserror::Error;

/// Recoverable query failures, surfaced to the caller as data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Author not found: {query}")]
    NotFound { query: String },

    #[error("Ambiguous author '{query}': {total} matches")]
    Ambiguous {
        query: String,
        /// Leading matches, capped by the lookup configuration
        candidates: Vec<Candidate>,
        /// Number of matches before capping
        total: usize,
    },

    #[error("No path between {from} and {to}")]
    NoPath { from: AuthorKey, to: AuthorKey },

    #[error("Productivity tree has not been built")]
    TreeNotBuilt,

    #[error("Author not in productivity tree: {0}")]
    NotInTree(AuthorKey),
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// A possible match offered for disambiguation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub key: AuthorKey,
    pub display_name: String,
    pub paper_count: u32,
}

/// Ordering for author listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending paper count
    #[default]
    PaperCount,
    /// Descending number of collaborators
    Degree,
}

/// One row of an author listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub key: AuthorKey,
    pub display_name: String,
    pub paper_count: u32,
    /// Number of distinct collaborators
    pub degree: usize,
    pub origin: KeyOrigin,
}

/// Result of an author listing or search
#[derive(Debug, Clone, Serialize)]
pub struct AuthorListing {
    /// Authors in listing order
    pub authors: Vec<AuthorSummary>,
    /// Total count (may differ from authors.len() if limit applied)
    pub total_count: usize,
}

/// Result of a shortest path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Authors on the path from source to target (inclusive)
    pub path: Vec<Author>,
    /// Edges along the path
    pub edges: Vec<Edge>,
    /// Path length (number of hops)
    pub length: usize,
    /// Sum of edge weights along the path
    pub cost: u64,
}

impl PathResult {
    pub fn new(path: Vec<Author>, edges: Vec<Edge>) -> Self {
        let length = edges.len();
        let cost = edges.iter().map(|e| u64::from(e.weight)).sum();
        Self {
            path,
            edges,
            length,
            cost,
        }
    }

    /// Keys along the path
    pub fn keys(&self) -> Vec<&AuthorKey> {
        self.path.iter().map(|a| &a.key).collect()
    }
}

/// Shortest paths from one author inside its 2-hop closure
#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodPaths {
    pub origin: Author,
    /// Number of authors in the closure, origin included
    pub closure_size: usize,
    /// One path per other closure member, ordered by cost then hops
    pub paths: Vec<PathResult>,
}

/// An author with its collaborator count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAuthor {
    pub author: Author,
    pub degree: usize,
}

/// A direct collaborator of some author
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collaborator {
    pub author: Author,
    /// Number of records shared with the queried author
    pub shared_records: u32,
}

/// Overview of one author
#[derive(Debug, Clone, Serialize)]
pub struct AuthorProfile {
    pub author: Author,
    /// Number of distinct collaborators
    pub degree: usize,
    /// Titles found on the author's edges, first-seen order, no duplicates
    pub titles: Vec<String>,
    /// Spellings that resolved to this author
    pub spellings: Vec<String>,
}

/// Result of a longest simple path search
#[derive(Debug, Clone, Serialize)]
pub struct LongestPathResult {
    /// Longest path found, starting at the origin
    pub path: Vec<Author>,
    /// Number of hops
    pub length: usize,
    /// Search steps taken
    pub steps: u64,
    /// False when a budget or cancellation stopped the search; the path is
    /// then a lower bound
    pub complete: bool,
    /// What cut the search short, if anything
    pub stopped_by: Option<StopReason>,
}

/// Why a longest path search ended before exhausting every simple path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Cancelled,
    StepBudget,
    Timeout,
    /// Paths were cut at the depth cap; the search itself ran to the end
    DepthLimit,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::Cancelled => "cancelled",
            StopReason::StepBudget => "step budget",
            StopReason::Timeout => "timeout",
            StopReason::DepthLimit => "depth limit",
        }
    }
}
