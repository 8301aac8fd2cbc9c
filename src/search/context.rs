//! Per-search bookkeeping: node counting and budget checks.

use std::time::{Duration, Instant};

use crate::core::Error;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Nodes between wall-clock checks.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Why a recursion stopped before producing a score.
#[derive(Debug)]
pub(crate) enum Halt {
    /// The node or time budget ran out.
    Budget,
    /// A game-state call failed.
    Failed(Error),
}

impl From<Error> for Halt {
    fn from(err: Error) -> Self {
        Halt::Failed(err)
    }
}

/// State threaded through one search call.
pub(crate) struct SearchContext {
    started: Instant,
    node_limit: Option<u64>,
    time_limit: Option<Duration>,
    pub stats: SearchStats,
}

impl SearchContext {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            started: Instant::now(),
            node_limit: config.node_limit,
            time_limit: config.time_limit,
            stats: SearchStats::default(),
        }
    }

    /// Count a node at `depth` and check the budget.
    pub fn visit(&mut self, depth: u32) -> Result<(), Halt> {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(limit) = self.node_limit {
            if self.stats.nodes_visited > limit {
                return Err(Halt::Budget);
            }
        }
        if let Some(limit) = self.time_limit {
            if self.stats.nodes_visited % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() >= limit {
                return Err(Halt::Budget);
            }
        }
        Ok(())
    }

    /// Stop the clock and hand back the statistics.
    pub fn finish(mut self) -> SearchStats {
        self.stats.time_us = self.started.elapsed().as_micros() as u64;
        self.stats
    }
}
