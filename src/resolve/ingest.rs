//! GraphBuilder: one ingestion pass from records to a collaboration graph

use super::record::Record;
use super::resolver::Resolver;
use crate::graph::{AuthorKey, CollaborationGraph, EdgeUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default number of ingested records between progress events
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

/// What happened to a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No parseable coauthors; counted, not an error
    Empty,
    /// Authors registered and pairs connected
    Ingested {
        authors: usize,
        new_edges: usize,
        reinforced_edges: usize,
    },
}

/// Distinct spellings that resolved to one identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellingVariant {
    pub key: AuthorKey,
    pub spellings: Vec<String>,
}

/// Summary of an ingestion pass
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// Records offered to the builder
    pub records_seen: usize,
    /// Records that produced at least one author
    pub records_ingested: usize,
    /// Zero-based positions of records without parseable coauthors
    pub empty_records: Vec<usize>,
    /// Author tokens parsed across all records, duplicates included
    pub author_mentions: usize,
    /// Distinct cleaned spellings seen
    pub distinct_spellings: usize,
    /// Authors in the graph
    pub authors: usize,
    /// Edges in the graph
    pub edges: usize,
    /// Identities reached through more than one spelling
    pub spelling_variants: Vec<SpellingVariant>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl IngestReport {
    fn new() -> Self {
        Self {
            records_seen: 0,
            records_ingested: 0,
            empty_records: Vec::new(),
            author_mentions: 0,
            distinct_spellings: 0,
            authors: 0,
            edges: 0,
            spelling_variants: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }
}

/// Result of an ingestion pass
#[derive(Debug, Clone)]
pub struct Corpus {
    pub resolver: Resolver,
    pub graph: CollaborationGraph,
    pub report: IngestReport,
}

/// Builds a collaboration graph from records, one record at a time
#[derive(Debug)]
pub struct GraphBuilder {
    resolver: Resolver,
    graph: CollaborationGraph,
    report: IngestReport,
    spellings: HashSet<String>,
    progress_every: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a builder with an empty resolver and graph
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
            graph: CollaborationGraph::new(),
            report: IngestReport::new(),
            spellings: HashSet::new(),
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }

    /// Set how many ingested records pass between progress events (0 disables)
    pub fn with_progress_every(mut self, progress_every: usize) -> Self {
        self.progress_every = progress_every;
        self
    }

    /// Ingest one record.
    ///
    /// Every unordered pair of the record's distinct authors gains an edge or
    /// a weight increment; each author's paper count rises by exactly one.
    pub fn ingest(&mut self, record: &Record) -> RecordOutcome {
        let position = self.report.records_seen;
        self.report.records_seen += 1;

        let resolved = self.resolver.resolve_record(
            &mut self.graph,
            &record.coauthors,
            record.external_id.as_deref(),
        );

        if resolved.is_empty() {
            warn!(record = position, raw = %record.coauthors, "no parseable coauthors");
            self.report.empty_records.push(position);
            return RecordOutcome::Empty;
        }

        self.report.records_ingested += 1;
        self.report.author_mentions += resolved.names.len();
        self.spellings.extend(resolved.names.iter().cloned());

        let mut new_edges = 0;
        let mut reinforced_edges = 0;
        for (i, a) in resolved.keys.iter().enumerate() {
            for b in &resolved.keys[i + 1..] {
                match self.graph.add_collaboration(a, b, &record.title, &record.doc_id) {
                    EdgeUpdate::Created => new_edges += 1,
                    EdgeUpdate::Reinforced => reinforced_edges += 1,
                    EdgeUpdate::Ignored => {}
                }
            }
        }

        debug!(
            record = position,
            authors = resolved.keys.len(),
            new_edges,
            reinforced_edges,
            "ingested record"
        );

        if self.progress_every > 0 && self.report.records_ingested % self.progress_every == 0 {
            info!(
                records = self.report.records_ingested,
                mentions = self.report.author_mentions,
                distinct = self.spellings.len(),
                "ingestion progress"
            );
        }

        RecordOutcome::Ingested {
            authors: resolved.keys.len(),
            new_edges,
            reinforced_edges,
        }
    }

    /// Ingest every record of an iterator
    pub fn ingest_all<I>(&mut self, records: I)
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        for record in records {
            self.ingest(&record.into());
        }
    }

    /// Finish the pass and hand over the resolver, graph and report
    pub fn finish(self) -> Corpus {
        let Self {
            resolver,
            graph,
            mut report,
            spellings,
            ..
        } = self;

        report.distinct_spellings = spellings.len();
        report.authors = graph.node_count();
        report.edges = graph.edge_count();
        report.spelling_variants = graph
            .authors()
            .filter(|author| resolver.spellings(&author.key).len() > 1)
            .map(|author| SpellingVariant {
                key: author.key.clone(),
                spellings: resolver.spellings(&author.key).to_vec(),
            })
            .collect();
        report.finished_at = Some(Utc::now());

        info!(
            records = report.records_seen,
            ingested = report.records_ingested,
            empty = report.empty_records.len(),
            authors = report.authors,
            edges = report.edges,
            "ingestion finished"
        );

        Corpus {
            resolver,
            graph,
            report,
        }
    }
}

/// Run a full ingestion pass with default settings
pub fn build_graph<I>(records: I) -> Corpus
where
    I: IntoIterator,
    I::Item: Into<Record>,
{
    let mut builder = GraphBuilder::new();
    builder.ingest_all(records);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_k_authors_adds_all_pairs() {
        let mut builder = GraphBuilder::new();
        let outcome = builder.ingest(&Record::new("P1", "d1", "A; B; C; D"));

        assert_eq!(
            outcome,
            RecordOutcome::Ingested {
                authors: 4,
                new_edges: 6,
                reinforced_edges: 0
            }
        );
        let corpus = builder.finish();
        assert_eq!(corpus.graph.edge_count(), 6);
    }

    #[test]
    fn test_repeated_record_reinforces_edges() {
        let corpus = build_graph(vec![
            Record::new("P1", "d1", "A; B; C"),
            Record::new("P2", "d2", "B; A"),
        ]);

        let ab = corpus.graph.edge_between(&"A".into(), &"B".into()).unwrap();
        assert_eq!(ab.weight, 2);
        assert_eq!(ab.titles, vec!["P1", "P2"]);
        assert_eq!(ab.doc_ids, vec!["d1", "d2"]);
        assert_eq!(corpus.graph.edge_count(), 3);
        assert_eq!(corpus.graph.get_author(&"A".into()).unwrap().paper_count, 2);
        assert_eq!(corpus.graph.get_author(&"C".into()).unwrap().paper_count, 1);
    }

    #[test]
    fn test_duplicate_tokens_do_not_create_self_loops() {
        let corpus = build_graph(vec![Record::new("P1", "d1", "A; a; B")]);

        assert_eq!(corpus.graph.edge_count(), 1);
        assert_eq!(corpus.graph.get_author(&"A".into()).unwrap().paper_count, 1);
    }

    #[test]
    fn test_empty_records_counted_not_fatal() {
        let corpus = build_graph(vec![
            Record::new("P1", "d1", "nan"),
            Record::new("P2", "d2", "A; B"),
            Record::new("P3", "d3", ""),
        ]);

        assert_eq!(corpus.report.records_seen, 3);
        assert_eq!(corpus.report.records_ingested, 1);
        assert_eq!(corpus.report.empty_records, vec![0, 2]);
        assert_eq!(corpus.graph.node_count(), 2);
    }

    #[test]
    fn test_single_author_record_counts_paper_without_edges() {
        let corpus = build_graph(vec![Record::new("Solo", "d1", "A")]);

        assert_eq!(corpus.graph.node_count(), 1);
        assert_eq!(corpus.graph.edge_count(), 0);
        assert_eq!(corpus.graph.get_author(&"A".into()).unwrap().paper_count, 1);
    }

    #[test]
    fn test_report_lists_spelling_variants() {
        let corpus = build_graph(vec![
            Record::new("P1", "d1", "Jane Smith; Bob Stone"),
            Record::new("P2", "d2", "JANE SMITH; Bob Stone"),
        ]);

        let report = &corpus.report;
        assert_eq!(report.author_mentions, 4);
        assert_eq!(report.distinct_spellings, 3);
        assert_eq!(report.spelling_variants.len(), 1);
        assert_eq!(report.spelling_variants[0].key.as_str(), "Jane Smith");
        assert_eq!(report.spelling_variants[0].spellings, vec!["Jane Smith", "JANE SMITH"]);
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_ingest_all_accepts_tuples() {
        let corpus = build_graph(vec![(
            "P1".to_string(),
            "d1".to_string(),
            "A, B".to_string(),
            None::<String>,
        )]);
        assert_eq!(corpus.graph.edge_count(), 1);
    }
}
