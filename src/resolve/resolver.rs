//! Resolver: maps raw author names to stable identities
//!
//! Owns the name and external-identifier registries for one ingestion
//! session. Name matching only considers name-keyed authors, so an author
//! registered under an external identifier stays distinct from a name-only
//! mention of the same person.

use super::tokenize::{clean_name, compact, normalize, parse_authors, parse_identifiers};
use crate::graph::{Author, AuthorKey, CollaborationGraph, KeyOrigin};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Authors resolved from one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedRecord {
    /// Cleaned name tokens, duplicates included
    pub names: Vec<String>,
    /// Distinct keys in first-seen order
    pub keys: Vec<AuthorKey>,
}

impl ResolvedRecord {
    /// Whether the record produced no authors
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Identity registries for one ingestion session
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    /// Normalized name -> key (first registration wins)
    by_name: HashMap<String, AuthorKey>,
    /// Whitespace-free normalized name -> key
    by_compact: HashMap<String, AuthorKey>,
    /// External identifier -> display name registered against it
    external_names: HashMap<AuthorKey, String>,
    /// Normalized external identifier -> key
    external_index: HashMap<String, AuthorKey>,
    /// Distinct spellings observed per key
    spellings: HashMap<AuthorKey, Vec<String>>,
}

impl Resolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one author name to a stable key, registering it in the graph.
    ///
    /// A non-empty `external_id` is used verbatim as the key. Otherwise the
    /// cleaned name is matched against known names, first by normalized
    /// equality, then with all whitespace removed, before a new key is
    /// minted from the cleaned name. Paper counts are not touched here.
    pub fn resolve(
        &mut self,
        graph: &mut CollaborationGraph,
        name: &str,
        external_id: Option<&str>,
    ) -> AuthorKey {
        let name = clean_name(name);

        let key = match external_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.register_external(graph, id, &name),
            None => self.register_name(graph, &name),
        };

        let spellings = self.spellings.entry(key.clone()).or_default();
        if !spellings.contains(&name) {
            spellings.push(name);
        }
        key
    }

    /// Resolve every author of a record and count the record once per author.
    ///
    /// `raw_external` may list one identifier per author; it is only used
    /// when its length matches the parsed names.
    pub fn resolve_record(
        &mut self,
        graph: &mut CollaborationGraph,
        raw_coauthors: &str,
        raw_external: Option<&str>,
    ) -> ResolvedRecord {
        let names = parse_authors(raw_coauthors);
        if names.is_empty() {
            return ResolvedRecord::default();
        }

        let ids = raw_external.map(parse_identifiers).unwrap_or_default();
        let ids: Vec<Option<String>> = if ids.len() == names.len() {
            ids.into_iter().map(Some).collect()
        } else {
            if !ids.is_empty() {
                warn!(
                    names = names.len(),
                    identifiers = ids.len(),
                    "external identifiers do not align with coauthors, ignoring them"
                );
            }
            vec![None; names.len()]
        };

        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for (name, id) in names.iter().zip(&ids) {
            let key = self.resolve(graph, name, id.as_deref());
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }

        for key in &keys {
            graph.increment_papers(key);
        }

        ResolvedRecord { names, keys }
    }

    /// Find the key registered for an external identifier.
    ///
    /// Comparison ignores case and any URL prefix, so
    /// `https://orcid.org/0000-0002-1825-0097` finds `0000-0002-1825-0097`.
    pub fn lookup_external(&self, text: &str) -> Option<&AuthorKey> {
        self.external_index.get(&normalize_identifier(text))
    }

    /// Display name registered against an external identifier
    pub fn external_name(&self, key: &AuthorKey) -> Option<&str> {
        self.external_names.get(key).map(String::as_str)
    }

    /// Distinct spellings that resolved to `key`, in first-seen order
    pub fn spellings(&self, key: &AuthorKey) -> &[String] {
        self.spellings.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of external identifiers registered
    pub fn external_count(&self) -> usize {
        self.external_names.len()
    }

    fn register_external(&mut self, graph: &mut CollaborationGraph, id: &str, name: &str) -> AuthorKey {
        let key = AuthorKey::from_string(id);
        graph.add_author(Author::new(key.clone(), name, KeyOrigin::External));
        self.external_names
            .entry(key.clone())
            .or_insert_with(|| name.to_string());
        self.external_index
            .entry(normalize_identifier(id))
            .or_insert_with(|| key.clone());
        key
    }

    fn register_name(&mut self, graph: &mut CollaborationGraph, name: &str) -> AuthorKey {
        let normalized = normalize(name);
        if let Some(key) = self.by_name.get(&normalized) {
            return key.clone();
        }

        let compacted = compact(name);
        if let Some(key) = self.by_compact.get(&compacted) {
            return key.clone();
        }

        let key = name_key(graph, name);
        graph.add_author(Author::new(key.clone(), name, KeyOrigin::Name));
        self.by_name.insert(normalized, key.clone());
        self.by_compact.entry(compacted).or_insert_with(|| key.clone());
        key
    }
}

/// Key for a new name-only author.
///
/// The cleaned name is the key unless an externally keyed author already
/// holds it; then a numbered suffix keeps the two identities apart.
fn name_key(graph: &CollaborationGraph, name: &str) -> AuthorKey {
    let key = AuthorKey::from_string(name);
    let held_externally = graph
        .get_author(&key)
        .is_some_and(|author| author.origin == KeyOrigin::External);
    if !held_externally {
        return key;
    }
    (2..)
        .map(|n| AuthorKey::from_string(format!("{} ({})", name, n)))
        .find(|key| graph.get_author(key).is_none())
        .unwrap_or(key)
}

/// Resolver hosts written in front of bare identifiers
const IDENTIFIER_HOSTS: [&str; 5] = [
    "orcid.org/",
    "www.orcid.org/",
    "doi.org/",
    "dx.doi.org/",
    "www.doi.org/",
];

/// Lowercase an identifier and strip a URL scheme and resolver host.
///
/// Slashes inside the identifier itself are kept, so `10.1/abc` and
/// `10.2/abc` stay distinct.
fn normalize_identifier(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut id = lowered.as_str();
    if let Some((_, rest)) = id.split_once("://") {
        id = rest;
    }
    if let Some(path) = IDENTIFIER_HOSTS.iter().find_map(|host| id.strip_prefix(host)) {
        id = path;
    } else if lowered.contains("://") {
        // Unknown host: the identifier is the URL path
        id = id.split_once('/').map_or(id, |(_, path)| path);
    }
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_differing_in_case_space_punctuation_share_key() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let a = resolver.resolve(&mut graph, "Jane Smith", None);
        let b = resolver.resolve(&mut graph, "  jane   SMITH. ", None);
        let c = resolver.resolve(&mut graph, "Jane, Smith", None);

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_author(&a).unwrap().display_name, "Jane Smith");
    }

    #[test]
    fn test_whitespace_free_pass_matches() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let a = resolver.resolve(&mut graph, "Mary Ann Lee", None);
        let b = resolver.resolve(&mut graph, "Maryann Lee", None);

        assert_eq!(a, b);
        assert_eq!(resolver.spellings(&a), &["Mary Ann Lee", "Maryann Lee"]);
    }

    #[test]
    fn test_external_id_is_key_and_stays_distinct_from_name() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let with_id = resolver.resolve(&mut graph, "Jane Smith", Some("0000-0001"));
        let without = resolver.resolve(&mut graph, "Jane Smith", None);

        assert_eq!(with_id.as_str(), "0000-0001");
        assert_ne!(with_id, without);
        assert_eq!(graph.get_author(&with_id).unwrap().origin, KeyOrigin::External);
        assert_eq!(resolver.external_name(&with_id), Some("Jane Smith"));
    }

    #[test]
    fn test_name_equal_to_external_key_gets_own_identity() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let external = resolver.resolve(&mut graph, "Jane Smith", Some("jsmith"));
        let named = resolver.resolve(&mut graph, "jsmith", None);
        let again = resolver.resolve(&mut graph, "JSmith", None);

        assert_ne!(external, named);
        assert_eq!(named, again);
        assert_eq!(named.as_str(), "jsmith (2)");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get_author(&named).unwrap().origin, KeyOrigin::Name);
        assert_eq!(graph.get_author(&named).unwrap().display_name, "jsmith");
        assert_eq!(graph.get_author(&external).unwrap().display_name, "Jane Smith");
    }

    #[test]
    fn test_blank_external_id_falls_back_to_name() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let key = resolver.resolve(&mut graph, "Jane Smith", Some("  "));
        assert_eq!(key.as_str(), "Jane Smith");
    }

    #[test]
    fn test_duplicate_tokens_count_record_once() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let record = resolver.resolve_record(&mut graph, "Jane Smith; jane smith; Bob Stone", None);

        assert_eq!(record.names.len(), 3);
        assert_eq!(record.keys.len(), 2);
        assert_eq!(graph.get_author(&"Jane Smith".into()).unwrap().paper_count, 1);
        assert_eq!(graph.get_author(&"Bob Stone".into()).unwrap().paper_count, 1);
    }

    #[test]
    fn test_aligned_external_ids() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let record = resolver.resolve_record(
            &mut graph,
            "Jane Smith; Bob Stone",
            Some("0000-0001; 0000-0002"),
        );
        assert_eq!(record.keys, vec![AuthorKey::from("0000-0001"), AuthorKey::from("0000-0002")]);
    }

    #[test]
    fn test_misaligned_external_ids_ignored() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let record = resolver.resolve_record(&mut graph, "Jane Smith; Bob Stone", Some("0000-0001"));
        assert_eq!(record.keys, vec![AuthorKey::from("Jane Smith"), AuthorKey::from("Bob Stone")]);
        assert_eq!(resolver.external_count(), 0);
    }

    #[test]
    fn test_empty_record() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();

        let record = resolver.resolve_record(&mut graph, "nan", None);
        assert!(record.is_empty());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_slashed_identifiers_stay_distinct() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();
        let first = resolver.resolve(&mut graph, "Jane Smith", Some("10.1/abc"));
        let second = resolver.resolve(&mut graph, "Bob Stone", Some("10.2/abc"));

        assert_ne!(first, second);
        assert_eq!(resolver.lookup_external("10.1/ABC"), Some(&first));
        assert_eq!(resolver.lookup_external("https://doi.org/10.2/abc"), Some(&second));
        assert_eq!(resolver.lookup_external("doi.org/10.1/abc"), Some(&first));
        assert!(resolver.lookup_external("abc").is_none());
    }

    #[test]
    fn test_lookup_external_ignores_prefix_and_case() {
        let mut graph = CollaborationGraph::new();
        let mut resolver = Resolver::new();
        resolver.resolve(&mut graph, "Josiah Carberry", Some("0000-0002-1825-009X"));

        let found = resolver.lookup_external("https://orcid.org/0000-0002-1825-009x");
        assert_eq!(found, Some(&AuthorKey::from("0000-0002-1825-009X")));
        assert!(resolver.lookup_external("0000-9999").is_none());
    }
}
