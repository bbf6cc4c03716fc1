//! # Height-Balanced Ordered Sets
//!
//! An AVL tree: a binary search tree that keeps, at every node,
//! `|height(left) - height(right)| <= 1`. Height therefore stays within
//! `1.44 · log2(n + 2)` and search, insert and delete are O(log n).
//!
//! ## Core Algorithm
//!
//! 1. **Descend**: ordinary BST positioning by comparator
//! 2. **Mutate**: hang a new leaf, or unlink a node (successor swap for two children)
//! 3. **Unwind**: refresh cached heights bottom-up
//! 4. **Rebalance**: one of four rotation cases (LL, LR, RR, RL) per unbalanced ancestor
//!
//! ## Usage Example
//!
//! ```
//! use avl_core::AvlTree;
//!
//! let mut tree: AvlTree<i32> = [10, 20, 30, 40, 50, 25].into_iter().collect();
//! assert_eq!(tree.inorder(), vec![10, 20, 25, 30, 40, 50]);
//! assert_eq!(tree.height(), 3);
//!
//! assert!(tree.remove(&40));
//! assert!(!tree.contains(&40));
//! assert_eq!(tree.min().ok(), Some(&10));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;     // Diagnostics switches
pub mod invariants; // Structural validation
pub mod order;      // Comparator seam
pub mod stats;      // Rebalancing counters
pub mod tree;       // Nodes, rotations, insert/delete, traversal

// Re-exports for convenience
pub use config::TreeConfig;
pub use invariants::InvariantViolation;
pub use order::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
pub use stats::TreeStats;
pub use tree::{max_height_for, AvlTree, Iter, Node};

use thiserror::Error;

/// Errors surfaced by [`AvlTree`] operations.
///
/// Duplicate inserts and removals of absent keys are not errors; they are
/// reported through `bool`/`Option` return values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Extremum query on a tree with no keys
    #[error("{op} called on an empty tree")]
    EmptyTree {
        /// Operation that was attempted
        op: &'static str,
    },

    /// Structural check failed
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TreeError::EmptyTree { op: "min" };
        assert_eq!(err.to_string(), "min called on an empty tree");

        let err: TreeError = InvariantViolation::Unordered { position: 4 }.into();
        assert_eq!(
            err.to_string(),
            "invariant violation: keys out of order at in-order position 4"
        );
    }
}
