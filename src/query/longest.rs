//! Longest simple path search
//!
//! Exhaustive depth-first backtracking over simple paths from one author.
//! Exponential in the worst case, so every search runs under a step budget,
//! an optional depth and wall-clock budget, and an optional cancellation
//! token. A search stopped early reports `complete: false` and its path is
//! a lower bound.

use super::cancel::CancellationToken;
use super::types::{LongestPathResult, QueryError, QueryResult, StopReason};
use crate::graph::{AuthorKey, CollaborationGraph};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default number of expansion steps before a search gives up
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Steps between wall-clock checks
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Query for the longest simple path starting at one author
#[derive(Debug, Clone)]
pub struct LongestPathQuery {
    /// Starting author
    pub origin: AuthorKey,
    /// Maximum expansion steps (None = unbounded)
    pub max_steps: Option<u64>,
    /// Maximum path length in hops (None = unbounded)
    pub max_depth: Option<usize>,
    /// Wall-clock budget
    pub timeout: Option<Duration>,
    /// Cooperative cancellation
    pub cancel: Option<CancellationToken>,
}

impl LongestPathQuery {
    /// Create a search from the given author with the default step budget
    pub fn from(origin: AuthorKey) -> Self {
        Self {
            origin,
            max_steps: Some(DEFAULT_MAX_STEPS),
            max_depth: None,
            timeout: None,
            cancel: None,
        }
    }

    /// Set the step budget (None = unbounded)
    pub fn max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Cap path length in hops
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set a wall-clock budget
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a cancellation token
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Execute the search
    ///
    /// Neighbors are explored in edge creation order; the first path
    /// strictly longer than every earlier one is kept.
    pub fn execute(&self, graph: &CollaborationGraph) -> QueryResult<LongestPathResult> {
        let origin = graph.index_of(&self.origin).ok_or_else(|| QueryError::NotFound {
            query: self.origin.to_string(),
        })?;

        let started = Instant::now();
        let mut on_path = vec![false; graph.node_count()];
        let mut path = vec![origin];
        // (node, next adjacency slot to try)
        let mut stack: Vec<(usize, usize)> = vec![(origin, 0)];
        let mut best = path.clone();
        let mut steps: u64 = 0;
        let mut stopped_by = None;

        on_path[origin] = true;

        while let Some(frame) = stack.last_mut() {
            if let Some(reason) = self.exhausted(steps, started) {
                warn!(
                    origin = %self.origin,
                    steps,
                    best = best.len(),
                    reason = reason.as_str(),
                    "longest path search stopped early"
                );
                stopped_by = Some(reason);
                break;
            }
            steps += 1;

            let (node, cursor) = *frame;
            let Some(&(next, _)) = graph.adjacent(node).get(cursor) else {
                // Backtrack
                stack.pop();
                path.pop();
                on_path[node] = false;
                continue;
            };
            frame.1 += 1;

            if on_path[next] {
                continue;
            }

            if self.max_depth.is_some_and(|depth| path.len() > depth) {
                stopped_by.get_or_insert(StopReason::DepthLimit);
                continue;
            }

            on_path[next] = true;
            path.push(next);
            stack.push((next, 0));

            if path.len() > best.len() {
                best = path.clone();
            }
        }

        let complete = stopped_by.is_none();
        debug!(origin = %self.origin, steps, length = best.len() - 1, complete, "longest path search");

        Ok(LongestPathResult {
            length: best.len() - 1,
            path: best.into_iter().map(|ix| graph.author_at(ix).clone()).collect(),
            steps,
            complete,
            stopped_by,
        })
    }

    /// Which budget, if any, is used up
    fn exhausted(&self, steps: u64, started: Instant) -> Option<StopReason> {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Some(StopReason::Cancelled);
        }
        if self.max_steps.is_some_and(|max| steps >= max) {
            return Some(StopReason::StepBudget);
        }
        if steps % CLOCK_CHECK_INTERVAL == 0 {
            if let Some(timeout) = self.timeout {
                if started.elapsed() >= timeout {
                    return Some(StopReason::Timeout);
                }
            }
        }
        None
    }
}
