//! Ordering strategies for [`Heap`](crate::Heap).
//!
//! A heap does not require `T: Ord`. Instead it holds an [`Order<T>`]
//! value chosen at construction that answers one question: should `a`
//! sit nearer the root than `b`?
//!
//! ```
//! use nexus_containers::{Ascending, Descending, Order};
//!
//! assert!(Ascending.prefers(&1, &2));
//! assert!(Descending.prefers(&2, &1));
//!
//! // Any `Fn(&T, &T) -> bool` is an ordering.
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(by_len.prefers(&"ab", &"abc"));
//! ```

/// Comparison capability used by [`Heap`](crate::Heap).
///
/// `prefers(a, b)` returns `true` when `a` should be nearer the root than
/// `b`. Implementations must behave as a strict weak ordering: irreflexive,
/// transitive, and with transitive incomparability. The heap does not
/// verify this; a non-conforming ordering breaks the heap property but is
/// memory safe.
pub trait Order<T: ?Sized> {
    /// Returns `true` if `a` should be nearer the root than `b`.
    fn prefers(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first (min-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: Ord + ?Sized> Order<T> for Ascending {
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first (max-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Order<T> for Descending {
    #[inline]
    fn prefers(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
