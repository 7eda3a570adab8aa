//! Output format value object

use serde::{Deserialize, Serialize};

/// How read results are rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored text (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
