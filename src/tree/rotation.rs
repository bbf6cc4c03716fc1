//! Rotation primitives and rebalancing dispatch
//!
//! ```text
//!        z                y
//!       / \             /   \
//!      y   T4   =>     T1    z
//!     / \                   / \
//!    T1  T3                T3  T4
//! ```
//!
//! `rotate_right(z)` above; `rotate_left` is the mirror image. In-order
//! sequence is unchanged: T3 holds keys between y and z, so it moves under z.

use tracing::trace;

use super::node::{balance_factor, Node, Side};
use crate::stats::StatsRecorder;

/// Promote `z.left` to subtree root. Returns the new root.
///
/// A node without a left child is returned as-is.
pub(crate) fn rotate_right<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = z.left.take() else {
        debug_assert!(false, "rotate_right requires a left child");
        return z;
    };
    z.left = y.right.take();
    // z is now y's child, so its height goes first
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

/// Promote `z.right` to subtree root. Returns the new root.
///
/// A node without a right child is returned as-is.
pub(crate) fn rotate_left<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = z.right.take() else {
        debug_assert!(false, "rotate_left requires a right child");
        return z;
    };
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

/// Left-Left: one right rotation at `node`.
fn fix_left_left<K>(node: Box<Node<K>>, stats: &mut StatsRecorder) -> Box<Node<K>> {
    trace!(case = "left-left", height = node.height, "rotate right");
    stats.single_rotation();
    rotate_right(node)
}

/// Left-Right: rotate the left child left, then `node` right.
fn fix_left_right<K>(mut node: Box<Node<K>>, stats: &mut StatsRecorder) -> Box<Node<K>> {
    trace!(case = "left-right", height = node.height, "rotate left, rotate right");
    stats.double_rotation();
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

/// Right-Right: one left rotation at `node`.
fn fix_right_right<K>(node: Box<Node<K>>, stats: &mut StatsRecorder) -> Box<Node<K>> {
    trace!(case = "right-right", height = node.height, "rotate left");
    stats.single_rotation();
    rotate_left(node)
}

/// Right-Left: rotate the right child right, then `node` left.
fn fix_right_left<K>(mut node: Box<Node<K>>, stats: &mut StatsRecorder) -> Box<Node<K>> {
    trace!(case = "right-left", height = node.height, "rotate right, rotate left");
    stats.double_rotation();
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

/// Rebalance after an insertion below `node`.
///
/// `heavy_side` is where the new key went relative to the key of the child
/// on the heavy side (`Left` = smaller than that child's key). That alone
/// picks single vs. double rotation; the children's balance factors are not
/// consulted. `node`'s height must already be current.
pub(crate) fn rebalance_after_insert<K>(
    node: Box<Node<K>>,
    heavy_side: Option<Side>,
    stats: &mut StatsRecorder,
) -> Box<Node<K>> {
    let bf = node.balance_factor();
    match (bf, heavy_side) {
        (bf, Some(Side::Left)) if bf > 1 => fix_left_left(node, stats),
        (bf, Some(Side::Right)) if bf > 1 => fix_left_right(node, stats),
        (bf, Some(Side::Right)) if bf < -1 => fix_right_right(node, stats),
        (bf, Some(Side::Left)) if bf < -1 => fix_right_left(node, stats),
        _ => node,
    }
}

/// Rebalance after a removal below `node`.
///
/// The removed key is gone, so the heavy child's own balance factor picks
/// the case. A heavy child with balance 0 takes the single rotation.
/// `node`'s height must already be current.
pub(crate) fn rebalance_after_remove<K>(
    node: Box<Node<K>>,
    stats: &mut StatsRecorder,
) -> Box<Node<K>> {
    let bf = node.balance_factor();
    if bf > 1 {
        if balance_factor(&node.left) >= 0 {
            fix_left_left(node, stats)
        } else {
            fix_left_right(node, stats)
        }
    } else if bf < -1 {
        if balance_factor(&node.right) <= 0 {
            fix_right_right(node, stats)
        } else {
            fix_right_left(node, stats)
        }
    } else {
        node
    }
}
