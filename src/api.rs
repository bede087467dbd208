//! Single query surface over one ingested corpus.
//!
//! `CoauthorApi` owns the resolver, the collaboration graph and the current
//! productivity tree for one session. Callers (the CLI, tests, an embedding
//! application) pass free-text author references; every reference goes
//! through the same identity lookup before reaching the graph algorithms.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::graph::{AuthorKey, CollaborationGraph};
use crate::query::{
    self, AuthorListing, AuthorProfile, AuthorQuery, CancellationToken, Collaborator, FindQuery,
    LongestPathQuery, LongestPathResult, NeighborhoodPaths, NeighborhoodQuery, PathQuery,
    PathResult, QueryError, QueryResult, RankedAuthor, SortKey,
};
use crate::resolve::{load_records, Corpus, GraphBuilder, IngestError, IngestReport, Record, Resolver};
use crate::tree::{OrderedIndex, ProductivityTree, TreeEntry};

/// Query surface for one coauthorship session
#[derive(Debug)]
pub struct CoauthorApi {
    corpus: Corpus,
    config: Config,
    tree: Option<Box<dyn OrderedIndex>>,
}

impl CoauthorApi {
    /// Wrap an already ingested corpus.
    pub fn new(corpus: Corpus, config: Config) -> Self {
        Self {
            corpus,
            config,
            tree: None,
        }
    }

    /// Run one ingestion pass over the records.
    pub fn from_records<I>(records: I, config: Config) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Record>,
    {
        let mut builder = GraphBuilder::new().with_progress_every(config.ingest.progress_every);
        builder.ingest_all(records);
        Self::new(builder.finish(), config)
    }

    /// Load a JSON or JSON Lines record file and ingest it.
    pub fn load(path: impl AsRef<Path>, config: Config) -> Result<Self, IngestError> {
        let records = load_records(path)?;
        Ok(Self::from_records(records, config))
    }

    pub fn graph(&self) -> &CollaborationGraph {
        &self.corpus.graph
    }

    pub fn resolver(&self) -> &Resolver {
        &self.corpus.resolver
    }

    pub fn report(&self) -> &IngestReport {
        &self.corpus.report
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // --- Identity ---

    /// Translate free text into an author key: exact, external id, substring.
    pub fn resolve_identity(&self, text: &str) -> QueryResult<AuthorKey> {
        FindQuery::text(text)
            .candidate_limit(self.config.lookup.candidate_limit)
            .execute(&self.corpus.resolver, &self.corpus.graph)
    }

    /// Profile of one author: counts, titles and observed spellings.
    pub fn author(&self, text: &str) -> QueryResult<AuthorProfile> {
        let key = self.resolve_identity(text)?;
        query::author_profile(&self.corpus.graph, &self.corpus.resolver, &key)
    }

    // --- Paths ---

    pub fn shortest_path(&self, from: &str, to: &str) -> QueryResult<PathResult> {
        let source = self.resolve_identity(from)?;
        let target = self.resolve_identity(to)?;
        PathQuery::between(source, target).execute(&self.corpus.graph)
    }

    /// Shortest paths from one author inside its 2-hop closure.
    pub fn neighborhood_shortest_paths(&self, origin: &str) -> QueryResult<NeighborhoodPaths> {
        let origin = self.resolve_identity(origin)?;
        NeighborhoodQuery::from(origin).execute(&self.corpus.graph)
    }

    /// Longest simple path under the configured budgets.
    pub fn longest_simple_path(&self, origin: &str) -> QueryResult<LongestPathResult> {
        let origin = self.resolve_identity(origin)?;
        self.longest_path_query(origin).execute(&self.corpus.graph)
    }

    /// Longest simple path that also stops when `token` is cancelled.
    pub fn longest_simple_path_with_cancel(
        &self,
        origin: &str,
        token: CancellationToken,
    ) -> QueryResult<LongestPathResult> {
        let origin = self.resolve_identity(origin)?;
        self.longest_path_query(origin)
            .cancel_token(token)
            .execute(&self.corpus.graph)
    }

    fn longest_path_query(&self, origin: AuthorKey) -> LongestPathQuery {
        let budget = &self.config.longest_path;
        let mut query = LongestPathQuery::from(origin).max_steps(budget.max_steps);
        if let Some(depth) = budget.max_depth {
            query = query.max_depth(depth);
        }
        if let Some(timeout) = budget.timeout() {
            query = query.timeout(timeout);
        }
        query
    }

    // --- Ranking ---

    pub fn most_connected_author(&self) -> Option<RankedAuthor> {
        query::most_connected(&self.corpus.graph)
    }

    pub fn degree_ranking(&self) -> Vec<RankedAuthor> {
        query::degree_ranking(&self.corpus.graph)
    }

    /// Direct collaborators, most productive first.
    pub fn collaborators(&self, text: &str) -> QueryResult<Vec<Collaborator>> {
        let key = self.resolve_identity(text)?;
        query::collaborators(&self.corpus.graph, &key)
    }

    pub fn list_authors(&self, sort_by: SortKey) -> AuthorListing {
        self.listing(AuthorQuery::new().sort_by(sort_by))
    }

    /// Authors whose display name contains `text`, most productive first.
    pub fn search_authors(&self, text: &str) -> AuthorListing {
        self.listing(AuthorQuery::new().containing(text))
    }

    fn listing(&self, query: AuthorQuery) -> AuthorListing {
        let query = match self.config.search.limit {
            Some(limit) => query.limit(limit),
            None => query,
        };
        query.execute(&self.corpus.graph)
    }

    // --- Productivity tree ---

    /// Replace the current tree with one built from `entries`, in order.
    ///
    /// Returns the new tree's in-order listing.
    pub fn build_productivity_tree<I>(&mut self, entries: I) -> Vec<TreeEntry>
    where
        I: IntoIterator<Item = TreeEntry>,
    {
        let tree = ProductivityTree::from_entries(entries);
        info!(entries = tree.len(), height = tree.height(), "productivity tree built");
        let listing = snapshot(&tree);
        self.tree = Some(Box::new(tree));
        listing
    }

    /// Build the tree from an author's collaborator queue.
    pub fn build_tree_from_collaborators(&mut self, text: &str) -> QueryResult<Vec<TreeEntry>> {
        let collaborators = self.collaborators(text)?;
        Ok(self.build_productivity_tree(collaborators.iter().map(TreeEntry::from)))
    }

    /// Remove an author from the tree. The graph is not touched.
    ///
    /// An entry whose identity equals the trimmed text is removed directly,
    /// so entries for authors outside the graph can be deleted too. Any
    /// other text goes through identity resolution first.
    pub fn delete_from_tree(&mut self, text: &str) -> QueryResult<TreeEntry> {
        let tree = self.tree.as_deref().ok_or(QueryError::TreeNotBuilt)?;
        let exact = AuthorKey::from(text.trim());
        let key = if tree.contains(&exact) {
            exact
        } else {
            self.resolve_identity(text)?
        };
        let tree = self.tree.as_mut().ok_or(QueryError::TreeNotBuilt)?;
        tree.delete(&key).ok_or(QueryError::NotInTree(key))
    }

    /// Current tree contents in ascending paper count.
    pub fn tree_in_order(&self) -> QueryResult<Vec<TreeEntry>> {
        self.tree
            .as_deref()
            .map(snapshot)
            .ok_or(QueryError::TreeNotBuilt)
    }
}

fn snapshot<T: OrderedIndex + ?Sized>(tree: &T) -> Vec<TreeEntry> {
    tree.in_order().into_iter().cloned().collect()
}
