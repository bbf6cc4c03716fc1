//! Structural validation
//!
//! One post-order walk checks, for every node:
//!   - in-order keys strictly increase under the tree's comparator
//!   - cached height = 1 + max(child heights)
//!   - balance factor in {-1, 0, 1}
//!
//! and finally that the node count matches the tree's recorded length.

use std::cmp::{self, Ordering};

use thiserror::Error;

use crate::order::Comparator;
use crate::tree::Node;

/// A broken structural invariant. Always a defect in the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// In-order sequence not strictly increasing.
    #[error("keys out of order at in-order position {position}")]
    Unordered {
        /// Zero-based in-order index of the offending key.
        position: usize,
    },

    /// Node balance factor outside {-1, 0, 1}.
    #[error("balance factor {balance} at in-order position {position}")]
    Unbalanced {
        /// Offending balance factor.
        balance: isize,
        /// Zero-based in-order index of the node.
        position: usize,
    },

    /// Cached height disagrees with the children.
    #[error("cached height {cached} but subtree height is {actual}")]
    StaleHeight {
        /// Height stored in the node.
        cached: usize,
        /// Height recomputed from the children.
        actual: usize,
    },

    /// Recorded length disagrees with the number of nodes.
    #[error("tree records {recorded} keys but holds {counted}")]
    LengthMismatch {
        /// Nodes reachable from the root.
        counted: usize,
        /// Length kept by the tree.
        recorded: usize,
    },
}

struct Walk<'a, K, C> {
    comparator: &'a C,
    previous: Option<&'a K>,
    position: usize,
}

impl<'a, K, C: Comparator<K>> Walk<'a, K, C> {
    /// Returns the recomputed height of `node`'s subtree.
    fn visit(&mut self, node: Option<&'a Node<K>>) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };

        let left = self.visit(node.left())?;

        if let Some(previous) = self.previous {
            if self.comparator.compare(previous, node.key()) != Ordering::Less {
                return Err(InvariantViolation::Unordered {
                    position: self.position,
                });
            }
        }
        self.previous = Some(node.key());
        let position = self.position;
        self.position += 1;

        let right = self.visit(node.right())?;

        let actual = 1 + cmp::max(left, right);
        if node.height() != actual {
            return Err(InvariantViolation::StaleHeight {
                cached: node.height(),
                actual,
            });
        }

        let balance = left as isize - right as isize;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantViolation::Unbalanced { balance, position });
        }

        Ok(actual)
    }
}

/// Validate the subtree rooted at `root` holding `len` keys.
///
/// Returns the subtree height on success.
pub(crate) fn check<K, C>(
    root: Option<&Node<K>>,
    comparator: &C,
    len: usize,
) -> Result<usize, InvariantViolation>
where
    C: Comparator<K>,
{
    let mut walk = Walk {
        comparator,
        previous: None,
        position: 0,
    };
    let height = walk.visit(root)?;
    if walk.position != len {
        return Err(InvariantViolation::LengthMismatch {
            counted: walk.position,
            recorded: len,
        });
    }
    Ok(height)
}
