//! Stop signal for the longest path search
//!
//! The caller keeps one clone and hands another to
//! [`LongestPathQuery::cancel_token`](super::LongestPathQuery::cancel_token).
//! The search polls the flag before every expansion step and, once it is
//! raised, returns the longest path found so far with
//! [`StopReason::Cancelled`](super::StopReason::Cancelled).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that ends a running longest path search.
///
/// Raising it is one-way; a search that already returned is unaffected.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    raised: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is already raised. A search given one takes no steps.
    pub fn cancelled() -> Self {
        let token = Self::new();
        token.cancel();
        token
    }

    pub fn is_cancelled(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Raise the flag for every clone of this token
    pub fn cancel(&self) {
        self.raised.store(true, Ordering::Release);
    }
}
