//! Tree node and height/balance utilities
//!
//! Node = key + cached height + two owned child slots.
//! Height of an absent subtree is 0, so a leaf has height 1.

use std::cmp;
use std::fmt;

/// Owned, possibly absent subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A node of an [`AvlTree`](crate::AvlTree).
///
/// Exposed read-only through [`AvlTree::root`](crate::AvlTree::root) so the
/// shape of a tree can be inspected. Nodes are created and destroyed only
/// by the tree's own insert and delete paths.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) height: usize,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Fresh leaf (height 1).
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Key stored at this node.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Cached subtree height (1 for a leaf).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Left subtree, if any.
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right subtree, if any.
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    ///
    /// In {-1, 0, 1} for every node of a tree at rest.
    #[inline]
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Recompute the cached height from the children's cached heights.
    ///
    /// Callers must update children first: this reads, never recurses.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    /// Mutable access to one child slot.
    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Number of nodes in this subtree. O(n).
    pub fn count(&self) -> usize {
        1 + self.left().map_or(0, Node::count) + self.right().map_or(0, Node::count)
    }
}

/// Height of a possibly absent subtree. O(1).
#[inline]
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a possibly absent subtree; 0 when absent.
#[inline]
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    /// Parenthesised pre-order form: `key(left right)`, `-` for an absent child.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.key);
        }
        write!(f, "{}(", self.key)?;
        match self.left() {
            Some(left) => write!(f, "{}", left)?,
            None => f.write_str("-")?,
        }
        f.write_str(" ")?;
        match self.right() {
            Some(right) => write!(f, "{}", right)?,
            None => f.write_str("-")?,
        }
        f.write_str(")")
    }
}
