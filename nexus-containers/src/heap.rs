//! Binary heap ordered by a caller-supplied predicate.
//!
//! Elements live in a `Vec` laid out as a complete binary tree. The
//! ordering is an [`Order<T>`] value fixed at construction, so one element
//! type can back a min-heap, a max-heap, or anything in between without
//! newtype wrappers.
//!
//! # Example
//!
//! ```
//! use nexus_containers::Heap;
//!
//! let mut heap = Heap::new(|a: &u64, b: &u64| a < b);
//! for v in [3, 4, 2, 6, 7, 1, 8, 5] {
//!     heap.insert(v);
//! }
//!
//! assert_eq!(heap.len(), 8);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let mut drained = Vec::new();
//! while let Some(v) = heap.remove() {
//!     drained.push(v);
//! }
//! assert_eq!(drained, [1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! # Timer Queue
//!
//! Orderings can look at any part of the element:
//!
//! ```
//! use nexus_containers::Heap;
//!
//! #[derive(Debug)]
//! struct Timer {
//!     deadline: u64,
//!     id: u32,
//! }
//!
//! let mut timers = Heap::new(|a: &Timer, b: &Timer| a.deadline < b.deadline);
//! timers.insert(Timer { deadline: 300, id: 1 });
//! timers.insert(Timer { deadline: 100, id: 2 });
//! timers.insert(Timer { deadline: 200, id: 3 });
//!
//! assert_eq!(timers.remove().map(|t| t.id), Some(2));
//! assert_eq!(timers.remove().map(|t| t.id), Some(3));
//! assert_eq!(timers.remove().map(|t| t.id), Some(1));
//! assert!(timers.remove().is_none());
//! ```

use core::fmt;

use crate::{Ascending, Descending, Order, SafeIndex};

/// A binary heap ordered by `O`.
///
/// The root is always an element that no other element is preferred over.
/// There is no bulk constructor: elements enter one at a time through
/// [`insert`](Self::insert) and leave through [`remove`](Self::remove).
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `O`: Ordering strategy (default [`Ascending`], a min-heap)
#[derive(Clone)]
pub struct Heap<T, O = Ascending> {
    nodes: Vec<T>,
    order: O,
}

impl<T: Ord> Heap<T, Ascending> {
    /// Creates an empty min-heap.
    #[inline]
    pub const fn min() -> Self {
        Self {
            nodes: Vec::new(),
            order: Ascending,
        }
    }
}

impl<T: Ord> Heap<T, Descending> {
    /// Creates an empty max-heap.
    #[inline]
    pub const fn max() -> Self {
        Self {
            nodes: Vec::new(),
            order: Descending,
        }
    }
}

impl<T: Ord> Default for Heap<T, Ascending> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T, O: Order<T>> Heap<T, O> {
    /// Creates an empty heap ordered by `order`.
    ///
    /// The ordering cannot be changed afterwards.
    #[inline]
    pub const fn new(order: O) -> Self {
        Self {
            nodes: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the capacity of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the ordering this heap was built with.
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the root element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Adds an element to the heap.
    ///
    /// O(log n).
    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the root element.
    ///
    /// Returns `None` if the heap is empty. O(log n).
    pub fn remove(&mut self) -> Option<T> {
        let last = self.nodes.pop()?;
        if self.nodes.is_empty() {
            return Some(last);
        }

        let root = core::mem::replace(&mut self.nodes[0], last);
        self.sift_down(0);
        Some(root)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    const fn parent(pos: usize) -> usize {
        (pos - 1) / 2
    }

    #[inline]
    const fn left(pos: usize) -> usize {
        2 * pos + 1
    }

    #[inline]
    const fn right(pos: usize) -> usize {
        2 * pos + 2
    }

    /// Moves the element at `pos` toward the root while it is preferred
    /// over its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = Self::parent(pos);
            if !self.order.prefers(&self.nodes[pos], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` away from the root while one of its
    /// children is preferred over it.
    fn sift_down(&mut self, mut pos: usize) {
        while let Some(child) = self.preferred(Self::left(pos), Self::right(pos)) {
            if !self.order.prefers(&self.nodes[child], &self.nodes[pos]) {
                break;
            }
            self.nodes.swap(pos, child);
            pos = child;
        }
    }

    /// Returns whichever of `a` and `b` the ordering prefers.
    ///
    /// An out-of-range position is never preferred; `None` if both are.
    /// Ties go to `b`.
    #[inline]
    fn preferred(&self, a: usize, b: usize) -> Option<usize> {
        match (self.nodes.at(a), self.nodes.at(b)) {
            (Some(x), Some(y)) => Some(if self.order.prefers(x, y) { a } else { b }),
            (Some(_), None) => Some(a),
            (None, Some(_)) => Some(b),
            (None, None) => None,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}
