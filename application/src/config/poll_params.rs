//! Poll parameters: use case behaviour knobs.
//!
//! [`PollParams`] groups the static parameters the read and vote use cases
//! consult. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// View sizing and voting policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollParams {
    /// Number of questions shown on the index.
    pub latest_limit: usize,
    /// Refuse votes on questions that are not yet published.
    ///
    /// Off by default: voting resolves the question without a time filter.
    pub vote_requires_published: bool,
}

impl Default for PollParams {
    fn default() -> Self {
        Self {
            latest_limit: 5,
            vote_requires_published: false,
        }
    }
}

impl PollParams {
    // ==================== Builder Methods ====================

    pub fn with_latest_limit(mut self, limit: usize) -> Self {
        self.latest_limit = limit;
        self
    }

    pub fn with_vote_requires_published(mut self, required: bool) -> Self {
        self.vote_requires_published = required;
        self
    }
}
