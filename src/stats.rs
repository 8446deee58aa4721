//! Statistics collection for searches.
//!
//! Mostly interesting for comparing the exhaustive and alpha-beta
//! searchers: the node counters make the effect of pruning visible
//! without instrumenting the search from outside.

use std::time::Duration;

/// Counters from a single [`Searcher::best_move`](crate::Searcher::best_move) call.
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,

    /// Candidate loops abandoned early because alpha met beta. Always
    /// zero for the exhaustive searcher.
    pub cutoffs: u64,

    /// Wall-clock time of the whole call.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Creates a zeroed statistics object.
    pub fn new() -> Self {
        SearchStats {
            nodes: 0,
            cutoffs: 0,
            elapsed: Duration::from_secs(0),
        }
    }

    /// Returns the number of positions visited per second.
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes as f64 / self.elapsed.as_secs_f64()
    }

    /// Returns a one-line summary, suitable for logs and demo output.
    pub fn summary(&self) -> String {
        format!(
            "{} nodes, {} cutoffs, {:.3} ms ({:.0} nodes/sec)",
            self.nodes,
            self.cutoffs,
            self.elapsed.as_secs_f64() * 1000.0,
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        Self::new()
    }
}
