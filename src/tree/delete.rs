//! Recursive deletion
//!
//! Once the matching node is found:
//!   - no children: drop it
//!   - one child: the child takes its place
//!   - two children: detach the in-order successor (leftmost node of the
//!     right subtree) and move its key into the matching node
//!
//! Every ancestor on the unwind path gets a height refresh and its own
//! rebalance check; a fix at one level does not end the walk.

use std::cmp::Ordering;
use std::mem;

use super::node::{Link, Node};
use super::rotation::rebalance_after_remove;
use crate::order::Comparator;
use crate::stats::StatsRecorder;

/// Remove `key` from the subtree at `link`.
///
/// Returns the new subtree root and the removed key, or `None` (subtree
/// untouched) when the key is absent.
pub(crate) fn remove<K, C>(
    link: Link<K>,
    key: &K,
    comparator: &C,
    stats: &mut StatsRecorder,
) -> (Link<K>, Option<K>)
where
    C: Comparator<K>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match comparator.compare(key, &node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key, comparator, stats);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key, comparator, stats);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { key, .. } = *node;
                return (None, Some(key));
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { key, .. } = *node;
                return (Some(child), Some(key));
            }
            (Some(left), Some(right)) => {
                let (rest, successor) = take_min(right, stats);
                node.left = Some(left);
                node.right = rest;
                Some(mem::replace(&mut node.key, successor))
            }
        },
    };

    if removed.is_none() {
        return (Some(node), None);
    }

    node.update_height();
    (Some(rebalance_after_remove(node, stats)), removed)
}

/// Detach the leftmost node of a non-empty subtree.
///
/// Returns the rebalanced remainder and the detached key.
pub(crate) fn take_min<K>(mut node: Box<Node<K>>, stats: &mut StatsRecorder) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = take_min(left, stats);
            node.left = rest;
            node.update_height();
            (Some(rebalance_after_remove(node, stats)), min)
        }
    }
}

/// Detach the rightmost node of a non-empty subtree.
pub(crate) fn take_max<K>(mut node: Box<Node<K>>, stats: &mut StatsRecorder) -> (Link<K>, K) {
    match node.right.take() {
        None => {
            let Node { key, left, .. } = *node;
            (left, key)
        }
        Some(right) => {
            let (rest, max) = take_max(right, stats);
            node.right = rest;
            node.update_height();
            (Some(rebalance_after_remove(node, stats)), max)
        }
    }
}
