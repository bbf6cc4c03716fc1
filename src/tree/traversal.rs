//! Read-only queries: search, extremes, in-order iteration
//!
//! Nothing here mutates a node or touches a cached height.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::node::{Link, Node};
use crate::order::Comparator;

/// Ordered descent. O(height).
pub(crate) fn search<K, C>(link: &Link<K>, key: &K, comparator: &C) -> bool
where
    C: Comparator<K>,
{
    let mut current = link;
    while let Some(node) = current {
        current = match comparator.compare(key, &node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

/// Leftmost key of a subtree.
pub(crate) fn find_min<K>(node: &Node<K>) -> &K {
    let mut node = node;
    while let Some(left) = node.left() {
        node = left;
    }
    &node.key
}

/// Rightmost key of a subtree.
pub(crate) fn find_max<K>(node: &Node<K>) -> &K {
    let mut node = node;
    while let Some(right) = node.right() {
        node = right;
    }
    &node.key
}

/// Ascending iterator over the keys of an [`AvlTree`](crate::AvlTree).
///
/// Explicit stack of pending ancestors: at most `height` entries, so
/// O(log n) extra space and no recursion.
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// Ancestors whose key has not been yielded yet
    stack: Vec<&'a Node<K>>,

    /// Keys not yet yielded
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let capacity = root.as_ref().map_or(0, |node| node.height);
        let mut iter = Self {
            stack: Vec::with_capacity(capacity),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<K>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
