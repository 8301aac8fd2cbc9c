//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Default lookahead for the myopic strategy.
pub const DEFAULT_LOOKAHEAD: u32 = 3;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum nodes to visit before giving up (`None` = unlimited).
    /// When exhausted, the best move among fully searched root moves is returned.
    pub node_limit: Option<u64>,

    /// Wall-clock limit for one `search` call (`None` = unlimited).
    pub time_limit: Option<Duration>,

    /// Plies searched before falling back to `rough_outcome`.
    /// Only the myopic strategy reads this.
    pub lookahead: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            time_limit: None,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a node budget.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Create a new config with a time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Create a new config with a custom lookahead.
    pub fn with_lookahead(mut self, plies: u32) -> Self {
        self.lookahead = plies;
        self
    }

    /// Reject budgets that could never allow a search.
    pub fn validate(&self) -> Result<()> {
        if self.node_limit == Some(0) {
            return Err(Error::invalid_configuration("node limit must be positive"));
        }
        Ok(())
    }
}
