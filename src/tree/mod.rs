//! Height-balanced binary search tree
//!
//! Strict ownership tree: the tree owns the root, every node owns its two
//! children, and there are no parent pointers. Mutations are recursive
//! `subtree -> new subtree` functions; the call stack remembers the path,
//! and each level writes the returned child back before fixing itself.
//!
//! After every public call:
//!   - in-order keys strictly increase under the comparator
//!   - every balance factor is in {-1, 0, 1}
//!   - every cached height is 1 + max(child heights)

mod delete;
mod insert;
mod node;
mod rotation;
mod traversal;

pub use node::Node;
pub use traversal::Iter;

use std::cmp::Ordering;
use std::mem;

use tracing::debug;

use crate::config::TreeConfig;
use crate::invariants;
use crate::order::{Comparator, FnComparator, NaturalOrder};
use crate::stats::{StatsRecorder, TreeStats};
use crate::TreeError;
use node::Link;

/// Upper bound on the height of any AVL tree holding `n` keys:
/// `⌈1.44 · log2(n + 2)⌉`.
pub fn max_height_for(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

/// Ordered set of unique keys backed by an AVL tree.
///
/// Search, insert and delete are O(log n). The ordering is fixed by the
/// comparator `C` chosen at construction.
#[derive(Debug)]
pub struct AvlTree<K, C = NaturalOrder> {
    root: Link<K>,
    len: usize,
    comparator: C,
    config: TreeConfig,
    stats: StatsRecorder,
}

impl<K: Ord> AvlTree<K, NaturalOrder> {
    /// Empty tree in the natural order of `K`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Empty tree in the natural order of `K` with explicit diagnostics.
    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_comparator_and_config(NaturalOrder, config)
    }
}

impl<K, F> AvlTree<K, FnComparator<F>>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Empty tree ordered by the closure `f`.
    pub fn by(f: F) -> Self {
        Self::with_comparator(FnComparator::new(f))
    }

    /// Empty tree ordered by the closure `f` with explicit diagnostics.
    pub fn by_with_config(f: F, config: TreeConfig) -> Self {
        Self::with_comparator_and_config(FnComparator::new(f), config)
    }
}

impl<K, C: Comparator<K>> AvlTree<K, C> {
    /// Empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_comparator_and_config(comparator, TreeConfig::default())
    }

    /// Empty tree ordered by `comparator` with explicit diagnostics.
    pub fn with_comparator_and_config(comparator: C, config: TreeConfig) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            config,
            stats: StatsRecorder::new(config.track_stats),
        }
    }

    /// Insert `key` if absent.
    ///
    /// Returns `false` (tree unchanged) when an equal key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, placement) =
            insert::insert(self.root.take(), key, &self.comparator, &mut self.stats);
        self.root = Some(root);

        let inserted = placement != insert::Placement::Duplicate;
        self.stats.insertion(inserted);
        if inserted {
            self.len += 1;
            self.after_mutation("insert");
        }
        inserted
    }

    /// Remove `key` if present. Returns whether a key was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove `key` if present and hand the stored key back.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let (root, removed) =
            delete::remove(self.root.take(), key, &self.comparator, &mut self.stats);
        self.root = root;

        self.stats.removal(removed.is_some());
        if removed.is_some() {
            self.len -= 1;
            self.after_mutation("remove");
        }
        removed
    }

    /// Whether `key` is present. O(log n).
    pub fn contains(&self, key: &K) -> bool {
        traversal::search(&self.root, key, &self.comparator)
    }

    /// Alias of [`contains`](Self::contains).
    pub fn search(&self, key: &K) -> bool {
        self.contains(key)
    }

    /// Smallest key.
    pub fn min(&self) -> Result<&K, TreeError> {
        self.root
            .as_deref()
            .map(traversal::find_min)
            .ok_or(TreeError::EmptyTree { op: "min" })
    }

    /// Largest key.
    pub fn max(&self) -> Result<&K, TreeError> {
        self.root
            .as_deref()
            .map(traversal::find_max)
            .ok_or(TreeError::EmptyTree { op: "max" })
    }

    /// Remove and return the smallest key.
    pub fn pop_min(&mut self) -> Result<K, TreeError> {
        let root = self.root.take().ok_or(TreeError::EmptyTree { op: "pop_min" })?;
        let (rest, key) = delete::take_min(root, &mut self.stats);
        self.finish_pop(rest, "pop_min");
        Ok(key)
    }

    /// Remove and return the largest key.
    pub fn pop_max(&mut self) -> Result<K, TreeError> {
        let root = self.root.take().ok_or(TreeError::EmptyTree { op: "pop_max" })?;
        let (rest, key) = delete::take_max(root, &mut self.stats);
        self.finish_pop(rest, "pop_max");
        Ok(key)
    }

    fn finish_pop(&mut self, rest: Link<K>, op: &'static str) {
        self.root = rest;
        self.len -= 1;
        self.stats.removal(true);
        self.after_mutation(op);
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Drop every key. Statistics are kept.
    pub fn clear(&mut self) {
        let dropped = mem::replace(&mut self.len, 0);
        self.root = None;
        debug!(dropped, "tree cleared");
    }

    /// Root node, for read-only inspection of the tree's shape.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Snapshot of the keys in ascending order.
    ///
    /// Each call builds a fresh vector; later mutations do not affect it.
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Run the full structural check.
    pub fn validate(&self) -> Result<(), TreeError> {
        invariants::check(self.root(), &self.comparator, self.len)?;
        Ok(())
    }

    /// Counters collected so far (all zero when tracking is disabled).
    pub fn stats(&self) -> TreeStats {
        self.stats.snapshot()
    }

    /// Zero all counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Diagnostics in effect.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The ordering in effect.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn after_mutation(&mut self, op: &'static str) {
        let height = self.height();
        self.stats.observe_height(height);
        debug!(op, len = self.len, height, "mutation applied");

        if self.config.verify_invariants {
            if let Err(violation) = invariants::check(self.root(), &self.comparator, self.len) {
                panic!("AVL invariant violated after {}: {}", op, violation);
            }
        }
    }
}

impl<K, C: Comparator<K> + Default> Default for AvlTree<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Comparator<K> + Default> FromIterator<K> for AvlTree<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, C: Comparator<K>> Extend<K> for AvlTree<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C: Comparator<K>> IntoIterator for &'a AvlTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
