//! Identity resolution and ingestion
//!
//! Raw records flow through the tokenizer and the `Resolver` into a
//! `CollaborationGraph`. The resolver owns the identity registries for a
//! session and is handed on to the query front end afterwards.

mod ingest;
mod record;
mod resolver;
pub mod tokenize;

pub use ingest::{
    build_graph, Corpus, GraphBuilder, IngestReport, RecordOutcome, SpellingVariant,
    DEFAULT_PROGRESS_EVERY,
};
pub use record::{load_records, parse_records, IngestError, Record};
pub use resolver::{ResolvedRecord, Resolver};
