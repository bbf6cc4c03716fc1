//! Recursive insertion
//!
//! Descend by comparison, hang a new leaf in the first empty slot, then on
//! the way back up refresh each ancestor's height and rebalance it.

use std::cmp::Ordering;

use super::node::{Link, Node, Side};
use super::rotation::rebalance_after_insert;
use crate::order::Comparator;
use crate::stats::StatsRecorder;

/// What happened at one level of the descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Key already present; the subtree is untouched.
    Duplicate,
    /// This slot was empty and now holds the new leaf.
    Leaf,
    /// The key continued into this child of the current node.
    Descended(Side),
}

impl Placement {
    fn side(self) -> Option<Side> {
        match self {
            Placement::Descended(side) => Some(side),
            Placement::Duplicate | Placement::Leaf => None,
        }
    }
}

/// Insert `key` under `link`, returning the (possibly new) subtree root.
///
/// The returned [`Placement`] tells the caller where the key went relative
/// to this subtree's root key. The parent uses it in place of re-comparing
/// the key against its child, since the key has been moved into the tree.
/// If this level rotated, the subtree's height is back to its old value and
/// the parent will not need that answer.
pub(crate) fn insert<K, C>(
    link: Link<K>,
    key: K,
    comparator: &C,
    stats: &mut StatsRecorder,
) -> (Box<Node<K>>, Placement)
where
    C: Comparator<K>,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Node::leaf(key), Placement::Leaf),
    };

    let side = match comparator.compare(&key, &node.key) {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => return (node, Placement::Duplicate),
    };

    let slot = node.child_mut(side);
    let (child, below) = insert(slot.take(), key, comparator, stats);
    *slot = Some(child);

    if below == Placement::Duplicate {
        return (node, Placement::Duplicate);
    }

    node.update_height();
    let node = rebalance_after_insert(node, below.side(), stats);
    (node, Placement::Descended(side))
}
