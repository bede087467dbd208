//! Degree ranking, collaborator lists and author profiles

use super::types::{AuthorProfile, Collaborator, QueryError, QueryResult, RankedAuthor};
use crate::graph::{AuthorKey, CollaborationGraph};
use crate::resolve::Resolver;
use std::collections::HashSet;

/// The author with the most collaborators.
///
/// Ties go to the author encountered first. Returns `None` when the graph
/// has no edges.
pub fn most_connected(graph: &CollaborationGraph) -> Option<RankedAuthor> {
    let mut best: Option<RankedAuthor> = None;
    let mut best_degree = 0;

    for author in graph.authors() {
        let degree = graph.degree(&author.key);
        if degree > best_degree {
            best_degree = degree;
            best = Some(RankedAuthor {
                author: author.clone(),
                degree,
            });
        }
    }

    best
}

/// Every author by descending degree, ties in first-encountered order
pub fn degree_ranking(graph: &CollaborationGraph) -> Vec<RankedAuthor> {
    let mut ranked: Vec<RankedAuthor> = graph
        .authors()
        .map(|author| RankedAuthor {
            author: author.clone(),
            degree: graph.degree(&author.key),
        })
        .collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree));
    ranked
}

/// Direct collaborators by descending paper count, ties in edge order
pub fn collaborators(graph: &CollaborationGraph, key: &AuthorKey) -> QueryResult<Vec<Collaborator>> {
    if !graph.contains(key) {
        return Err(QueryError::NotFound {
            query: key.to_string(),
        });
    }

    let mut collaborators: Vec<Collaborator> = graph
        .neighbors(key)
        .map(|(author, edge)| Collaborator {
            author: author.clone(),
            shared_records: edge.weight,
        })
        .collect();
    collaborators.sort_by(|a, b| b.author.paper_count.cmp(&a.author.paper_count));
    Ok(collaborators)
}

/// Overview of one author with the titles found on its edges
pub fn author_profile(
    graph: &CollaborationGraph,
    resolver: &Resolver,
    key: &AuthorKey,
) -> QueryResult<AuthorProfile> {
    let author = graph.get_author(key).ok_or_else(|| QueryError::NotFound {
        query: key.to_string(),
    })?;

    let mut seen = HashSet::new();
    let titles = graph
        .neighbors(key)
        .flat_map(|(_, edge)| edge.titles.iter().map(String::as_str))
        .filter(|title| !title.is_empty() && seen.insert(*title))
        .map(str::to_string)
        .collect();

    Ok(AuthorProfile {
        author: author.clone(),
        degree: graph.degree(key),
        titles,
        spellings: resolver.spellings(key).to_vec(),
    })
}
