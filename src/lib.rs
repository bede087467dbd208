//! Coauthor: coauthorship graph engine
//!
//! Resolves author identities across noisy free-text coauthor fields,
//! builds a weighted undirected collaboration graph, and answers
//! structural queries over it.
//!
//! # Core Concepts
//!
//! - **Authors**: stable identities keyed by an external registry id or a
//!   normalized name, with a running paper count
//! - **Edges**: undirected collaborations weighted by shared records, carrying
//!   the titles and document ids of those records
//! - **Productivity tree**: an ordered index over a chosen author subset,
//!   keyed by paper count
//!
//! # Example
//!
//! ```
//! use coauthor::{CoauthorApi, Config, Record};
//!
//! let api = CoauthorApi::from_records(
//!     vec![
//!         Record::new("Sparse Cuts", "10.1/1", "Jane Smith; Bob Stone"),
//!         Record::new("Dense Cuts", "10.1/2", "Bob Stone; Carol King"),
//!     ],
//!     Config::default(),
//! );
//!
//! let path = api.shortest_path("Jane Smith", "carol").unwrap();
//! assert_eq!(path.length, 2);
//! ```

pub mod api;
pub mod config;
mod graph;
pub mod query;
pub mod resolve;
pub mod tree;

pub use api::CoauthorApi;
pub use config::{Config, ConfigError};
pub use graph::{Author, AuthorKey, CollaborationGraph, Edge, EdgeUpdate, KeyOrigin};
pub use query::{
    AuthorListing, CancellationToken, LongestPathResult, NeighborhoodPaths, PathResult, QueryError,
    QueryResult, SortKey, StopReason,
};
pub use resolve::{build_graph, load_records, Corpus, IngestError, IngestReport, Record};
pub use tree::{OrderedIndex, ProductivityTree, TreeEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
