//! Query system for collaboration graphs
//!
//! Provides identity lookup, author listings, weighted shortest paths,
//! degree ranking and longest simple path search. Every query is read-only
//! over the graph and keeps its working state local.

mod cancel;
mod find;
mod longest;
mod path;
mod rank;
mod types;

pub use cancel::CancellationToken;
pub use find::{AuthorQuery, FindQuery, DEFAULT_CANDIDATE_LIMIT};
pub use longest::{LongestPathQuery, DEFAULT_MAX_STEPS};
pub use path::{NeighborhoodQuery, PathQuery};
pub use rank::{author_profile, collaborators, degree_ranking, most_connected};
pub use types::{
    AuthorListing, AuthorProfile, AuthorSummary, Candidate, Collaborator, LongestPathResult,
    NeighborhoodPaths, PathResult, QueryError, QueryResult, RankedAuthor, SortKey,
    StopReason,
};
