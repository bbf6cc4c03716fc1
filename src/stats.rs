//! Rebalancing statistics
//!
//! One `&mut` recorder is threaded through the recursive mutation paths
//! and updated in place.

/// Counters describing the work done by a tree since creation (or the last
/// [`reset_stats`](crate::AvlTree::reset_stats)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Keys actually inserted.
    pub insertions: u64,

    /// Inserts rejected because the key was already present.
    pub rejected_duplicates: u64,

    /// Keys actually removed.
    pub removals: u64,

    /// Removals of keys that were not present.
    pub missed_removals: u64,

    /// Left-Left and Right-Right fixes.
    pub single_rotations: u64,

    /// Left-Right and Right-Left fixes (counted once each).
    pub double_rotations: u64,

    /// Largest tree height observed after a mutation.
    pub peak_height: usize,
}

impl TreeStats {
    /// Total rebalancing transforms applied.
    pub fn rebalances(&self) -> u64 {
        self.single_rotations + self.double_rotations
    }

    /// One-line summary.
    pub fn report(&self) -> String {
        format!(
            "inserted {} (rejected {}), removed {} (missed {}), rotations {} single / {} double, peak height {}",
            self.insertions,
            self.rejected_duplicates,
            self.removals,
            self.missed_removals,
            self.single_rotations,
            self.double_rotations,
            self.peak_height
        )
    }
}

/// Recorder handed down the mutation paths.
///
/// Disabled recorders swallow every update.
#[derive(Debug)]
pub(crate) struct StatsRecorder {
    enabled: bool,
    stats: TreeStats,
}

impl StatsRecorder {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            stats: TreeStats::default(),
        }
    }

    #[inline]
    pub(crate) fn single_rotation(&mut self) {
        if self.enabled {
            self.stats.single_rotations += 1;
        }
    }

    #[inline]
    pub(crate) fn double_rotation(&mut self) {
        if self.enabled {
            self.stats.double_rotations += 1;
        }
    }

    pub(crate) fn insertion(&mut self, inserted: bool) {
        if !self.enabled {
            return;
        }
        if inserted {
            self.stats.insertions += 1;
        } else {
            self.stats.rejected_duplicates += 1;
        }
    }

    pub(crate) fn removal(&mut self, removed: bool) {
        if !self.enabled {
            return;
        }
        if removed {
            self.stats.removals += 1;
        } else {
            self.stats.missed_removals += 1;
        }
    }

    pub(crate) fn observe_height(&mut self, height: usize) {
        if self.enabled {
            self.stats.peak_height = self.stats.peak_height.max(height);
        }
    }

    pub(crate) fn snapshot(&self) -> TreeStats {
        self.stats
    }

    pub(crate) fn reset(&mut self) {
        self.stats = TreeStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_recorder_stays_zero() {
        let mut recorder = StatsRecorder::new(false);
        recorder.single_rotation();
        recorder.double_rotation();
        recorder.insertion(true);
        recorder.removal(false);
        recorder.observe_height(9);
        assert_eq!(recorder.snapshot(), TreeStats::default());
    }

    #[test]
    fn test_counts_and_report() {
        let mut recorder = StatsRecorder::new(true);
        recorder.insertion(true);
        recorder.insertion(false);
        recorder.single_rotation();
        recorder.double_rotation();
        recorder.observe_height(4);
        recorder.observe_height(2);

        let stats = recorder.snapshot();
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.rejected_duplicates, 1);
        assert_eq!(stats.rebalances(), 2);
        assert_eq!(stats.peak_height, 4);
        assert!(stats.report().contains("peak height 4"));

        recorder.reset();
        assert_eq!(recorder.snapshot(), TreeStats::default());
    }
}
