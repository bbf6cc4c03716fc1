//! Key ordering
//!
//! The tree never calls `Ord` directly. Every comparison goes through a
//! [`Comparator`] fixed at construction, so callers can inject any total
//! order over `K`.

use std::cmp::Ordering;
use std::fmt;

/// Total order over keys of type `K`.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// are opposite, and the relation is transitive. The tree's ordering
/// invariant is only as sound as the comparator.
pub trait Comparator<K> {
    /// Compare two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural ordering of `K: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed natural ordering (largest key first).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

/// Adapter turning a closure into a [`Comparator`].
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    f: F,
}

impl<F> FnComparator<F> {
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<K, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.f)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator(..)")
    }
}
