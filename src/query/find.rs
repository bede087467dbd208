//! Find queries: identity lookup and author listings

use super::types::{AuthorListing, AuthorSummary, Candidate, QueryError, QueryResult, SortKey};
use crate::graph::{Author, AuthorKey, CollaborationGraph};
use crate::resolve::Resolver;

/// Default cap on candidates carried by an ambiguous lookup
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Query translating free text into a resolved author identity
///
/// Resolution order: exact key or display name, then external identifier,
/// then case-insensitive substring of display names. Looser matching never
/// shadows an exact or identifier hit.
#[derive(Debug, Clone)]
pub struct FindQuery {
    /// Text as typed by the caller
    pub text: String,
    /// Maximum candidates returned with an ambiguous result
    pub candidate_limit: usize,
}

impl FindQuery {
    /// Create a lookup for the given text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }

    /// Cap the candidates carried by an ambiguous result
    pub fn candidate_limit(mut self, candidate_limit: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self
    }

    /// Execute the lookup
    pub fn execute(&self, resolver: &Resolver, graph: &CollaborationGraph) -> QueryResult<AuthorKey> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(self.not_found());
        }

        if let Some(author) = graph
            .authors()
            .find(|a| a.key.as_str() == text || a.display_name == text)
        {
            return Ok(author.key.clone());
        }

        if let Some(key) = resolver.lookup_external(text) {
            if graph.contains(key) {
                return Ok(key.clone());
            }
        }

        let needle = text.to_lowercase();
        let matches: Vec<&Author> = graph
            .authors()
            .filter(|a| a.display_name.to_lowercase().contains(&needle))
            .collect();

        match matches.as_slice() {
            [] => Err(self.not_found()),
            [single] => Ok(single.key.clone()),
            _ => Err(QueryError::Ambiguous {
                query: text.to_string(),
                candidates: matches
                    .iter()
                    .take(self.candidate_limit)
                    .map(|a| Candidate {
                        key: a.key.clone(),
                        display_name: a.display_name.clone(),
                        paper_count: a.paper_count,
                    })
                    .collect(),
                total: matches.len(),
            }),
        }
    }

    fn not_found(&self) -> QueryError {
        QueryError::NotFound {
            query: self.text.trim().to_string(),
        }
    }
}

/// Query listing authors, optionally filtered by a name substring
#[derive(Debug, Clone, Default)]
pub struct AuthorQuery {
    /// Case-insensitive substring of the display name
    pub containing: Option<String>,
    /// Listing order
    pub sort_by: SortKey,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of results to skip
    pub offset: Option<usize>,
}

impl AuthorQuery {
    /// Create a query matching every author
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by display-name substring
    pub fn containing(mut self, text: impl Into<String>) -> Self {
        self.containing = Some(text.into());
        self
    }

    /// Set the listing order
    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip results (for pagination)
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Execute the query against a graph
    ///
    /// Ties keep first-encountered order.
    pub fn execute(&self, graph: &CollaborationGraph) -> AuthorListing {
        let needle = self
            .containing
            .as_deref()
            .map(|text| text.trim().to_lowercase());

        let mut authors: Vec<AuthorSummary> = graph
            .authors()
            .filter(|a| match &needle {
                Some(needle) => a.display_name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .map(|a| AuthorSummary {
                key: a.key.clone(),
                display_name: a.display_name.clone(),
                paper_count: a.paper_count,
                degree: graph.degree(&a.key),
                origin: a.origin,
            })
            .collect();

        match self.sort_by {
            SortKey::PaperCount => authors.sort_by(|a, b| b.paper_count.cmp(&a.paper_count)),
            SortKey::Degree => authors.sort_by(|a, b| b.degree.cmp(&a.degree)),
        }

        let total_count = authors.len();

        if let Some(offset) = self.offset {
            authors = authors.into_iter().skip(offset).collect();
        }

        if let Some(limit) = self.limit {
            authors.truncate(limit);
        }

        AuthorListing {
            authors,
            total_count,
        }
    }
}
