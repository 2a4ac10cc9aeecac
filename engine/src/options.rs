//! Solver configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Boards between cancellation and deadline checks
pub const CHECK_INTERVAL: u64 = 4096;

/// Shared flag that stops an enumeration in progress
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How an equity request is enumerated
///
/// Results do not depend on these settings, only speed and whether the run
/// may stop early.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Split the board space across the rayon pool
    pub parallel: bool,
    /// Number of index-space partitions; `None` picks four per worker thread
    pub shards: Option<usize>,
    /// Give up once this much time has passed
    pub timeout: Option<Duration>,
    /// Give up once this token is cancelled
    pub cancel: Option<CancelToken>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            parallel: true,
            shards: None,
            timeout: None,
            cancel: None,
        }
    }
}

impl SolveOptions {
    /// Single-threaded enumeration
    pub fn sequential() -> Self {
        SolveOptions {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = Some(shards);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Partition count for a run over `boards` boards
    pub(crate) fn shard_count(&self, boards: u64) -> usize {
        if !self.parallel {
            return 1;
        }
        let wanted = self
            .shards
            .unwrap_or_else(|| rayon::current_num_threads() * 4)
            .max(1);
        wanted.min(boards.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_count() {
        assert_eq!(SolveOptions::sequential().with_shards(8).shard_count(1000), 1);
        assert_eq!(SolveOptions::default().with_shards(8).shard_count(1000), 8);
        assert_eq!(SolveOptions::default().with_shards(8).shard_count(3), 3);
        assert_eq!(SolveOptions::default().with_shards(0).shard_count(3), 1);
        assert!(SolveOptions::default().shard_count(1_000_000) >= 4);
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled(), "Clones observe cancellation");
    }
}
