//! Weighted shortest paths
//!
//! Edge cost is the edge weight. Among equal-cost routes the one with
//! fewer hops wins, so hop length is the same in both directions.

use super::types::{NeighborhoodPaths, PathResult, QueryError, QueryResult};
use crate::graph::{AuthorKey, CollaborationGraph};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Query for the cheapest path between two authors
#[derive(Debug, Clone)]
pub struct PathQuery {
    /// Source author
    pub source: AuthorKey,
    /// Target author
    pub target: AuthorKey,
}

impl PathQuery {
    /// Create a new path query between two authors
    pub fn between(source: AuthorKey, target: AuthorKey) -> Self {
        Self { source, target }
    }

    /// Execute the path query (Dijkstra over the whole graph)
    pub fn execute(&self, graph: &CollaborationGraph) -> QueryResult<PathResult> {
        let source = index_or_not_found(graph, &self.source)?;
        let target = index_or_not_found(graph, &self.target)?;

        if source == target {
            return Ok(PathResult::new(vec![graph.author_at(source).clone()], vec![]));
        }

        let tree = ShortestPaths::compute(graph, source, None);
        tree.path_to(graph, target).ok_or_else(|| QueryError::NoPath {
            from: self.source.clone(),
            to: self.target.clone(),
        })
    }
}

/// Query for shortest paths from one author to every member of its 2-hop
/// closure, using only closure members as intermediate nodes
#[derive(Debug, Clone)]
pub struct NeighborhoodQuery {
    pub origin: AuthorKey,
}

impl NeighborhoodQuery {
    pub fn from(origin: AuthorKey) -> Self {
        Self { origin }
    }

    /// Execute the query
    ///
    /// Paths are ordered by cost, then hops, then closure discovery order.
    pub fn execute(&self, graph: &CollaborationGraph) -> QueryResult<NeighborhoodPaths> {
        let origin = index_or_not_found(graph, &self.origin)?;
        let closure = two_hop_closure(graph, origin);
        let allowed: HashSet<usize> = closure.iter().copied().collect();

        let tree = ShortestPaths::compute(graph, origin, Some(&allowed));

        let mut paths: Vec<PathResult> = closure
            .iter()
            .filter(|&&ix| ix != origin)
            .filter_map(|&ix| tree.path_to(graph, ix))
            .collect();
        paths.sort_by(|a, b| a.cost.cmp(&b.cost).then(a.length.cmp(&b.length)));

        Ok(NeighborhoodPaths {
            origin: graph.author_at(origin).clone(),
            closure_size: closure.len(),
            paths,
        })
    }
}

fn index_or_not_found(graph: &CollaborationGraph, key: &AuthorKey) -> QueryResult<usize> {
    graph.index_of(key).ok_or_else(|| QueryError::NotFound {
        query: key.to_string(),
    })
}

/// Origin, its neighbors, and their neighbors, in discovery order
fn two_hop_closure(graph: &CollaborationGraph, origin: usize) -> Vec<usize> {
    let mut seen = HashSet::from([origin]);
    let mut closure = vec![origin];

    let neighbors: Vec<usize> = graph.adjacent(origin).iter().map(|&(n, _)| n).collect();
    for &n in &neighbors {
        if seen.insert(n) {
            closure.push(n);
        }
    }
    for &n in &neighbors {
        for &(m, _) in graph.adjacent(n) {
            if seen.insert(m) {
                closure.push(m);
            }
        }
    }

    closure
}

/// Heap entry; ordering is reversed so the max-heap pops the cheapest state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: u64,
    hops: usize,
    node: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest path tree
struct ShortestPaths {
    /// node -> (cost, hops)
    dist: HashMap<usize, (u64, usize)>,
    /// node -> (predecessor, edge)
    prev: HashMap<usize, (usize, usize)>,
}

impl ShortestPaths {
    /// Dijkstra from `source`, optionally confined to `allowed` nodes
    fn compute(graph: &CollaborationGraph, source: usize, allowed: Option<&HashSet<usize>>) -> Self {
        let mut dist: HashMap<usize, (u64, usize)> = HashMap::new();
        let mut prev: HashMap<usize, (usize, usize)> = HashMap::new();
        let mut heap = BinaryHeap::new();

        dist.insert(source, (0, 0));
        heap.push(State {
            cost: 0,
            hops: 0,
            node: source,
        });

        while let Some(State { cost, hops, node }) = heap.pop() {
            if dist.get(&node).is_some_and(|&best| (cost, hops) > best) {
                continue;
            }

            for &(neighbor, edge) in graph.adjacent(node) {
                if allowed.is_some_and(|set| !set.contains(&neighbor)) {
                    continue;
                }

                let next = (cost + u64::from(graph.edge_at(edge).weight), hops + 1);
                let improves = dist.get(&neighbor).map_or(true, |&best| next < best);
                if improves {
                    dist.insert(neighbor, next);
                    prev.insert(neighbor, (node, edge));
                    heap.push(State {
                        cost: next.0,
                        hops: next.1,
                        node: neighbor,
                    });
                }
            }
        }

        Self { dist, prev }
    }

    /// Reconstruct the path to `target`, if it was reached
    fn path_to(&self, graph: &CollaborationGraph, target: usize) -> Option<PathResult> {
        if !self.dist.contains_key(&target) {
            return None;
        }

        let mut authors = vec![graph.author_at(target).clone()];
        let mut edges = Vec::new();

        // Walk backwards from target to source
        let mut current = target;
        while let Some(&(pred, edge)) = self.prev.get(&current) {
            edges.push(graph.edge_at(edge).clone());
            authors.push(graph.author_at(pred).clone());
            current = pred;
        }

        authors.reverse();
        edges.reverse();
        Some(PathResult::new(authors, edges))
    }
}
