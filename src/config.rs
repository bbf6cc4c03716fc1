//! Diagnostic configuration
//!
//! Ordering is fixed by the comparator. Everything here only controls how
//! much the tree checks and records about itself.

/// Diagnostics switches for an [`AvlTree`](crate::AvlTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Run the full structural validator after every mutating call and
    /// panic if it fails. O(n) per mutation.
    pub verify_invariants: bool,

    /// Collect rotation and mutation counters.
    pub track_stats: bool,
}

impl TreeConfig {
    /// Verification and statistics both enabled.
    pub fn debug() -> Self {
        Self {
            verify_invariants: true,
            track_stats: true,
        }
    }

    /// Verification and statistics both disabled.
    pub fn release() -> Self {
        Self {
            verify_invariants: false,
            track_stats: false,
        }
    }

    /// Enable or disable post-mutation verification.
    pub fn with_verify_invariants(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }

    /// Enable or disable statistics collection.
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.track_stats = enabled;
        self
    }
}

impl Default for TreeConfig {
    /// Verify in debug builds only; always count.
    fn default() -> Self {
        Self {
            verify_invariants: cfg!(debug_assertions),
            track_stats: true,
        }
    }
}
