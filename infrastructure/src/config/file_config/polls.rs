//! Poll behaviour from TOML (`[polls]` section)

use polls_application::PollParams;
use serde::{Deserialize, Serialize};

/// Raw poll configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollsConfig {
    /// Number of questions on the index
    pub latest_limit: usize,
    /// Refuse votes on questions whose publication date is in the future
    pub vote_requires_published: bool,
}

impl Default for FilePollsConfig {
    fn default() -> Self {
        let params = PollParams::default();
        Self {
            latest_limit: params.latest_limit,
            vote_requires_published: params.vote_requires_published,
        }
    }
}

impl FilePollsConfig {
    pub fn to_params(&self) -> PollParams {
        PollParams::default()
            .with_latest_limit(self.latest_limit)
            .with_vote_requires_published(self.vote_requires_published)
    }
}
