//! Chat history configuration.

use serde::{Deserialize, Serialize};

/// Chat history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of messages returned when the caller gives no `limit`.
    #[serde(default = "default_history_limit")]
    pub default_history_limit: usize,
    /// Upper bound applied to any requested `limit`.
    #[serde(default = "default_max_history_limit")]
    pub max_history_limit: usize,
}

impl ChatConfig {
    /// Resolve a requested history size against the configured bounds.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_history_limit)
            .clamp(1, self.max_history_limit)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_history_limit: default_history_limit(),
            max_history_limit: default_max_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    50
}

fn default_max_history_limit() -> usize {
    500
}
