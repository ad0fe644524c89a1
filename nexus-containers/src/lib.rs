//! Generic containers: a predicate-ordered binary heap and a sentinel-ring
//! doubly-linked list.
//!
//! The two containers are independent of each other.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`Heap`] | Priority queues, timers | O(log n) insert/remove, O(1) peek |
//! | [`LinkedList`] | Deques with positional access | O(1) push/pop at both ends, O(min(i, n - i)) by index |
//!
//! # Heap
//!
//! A heap is ordered by an [`Order`] chosen at construction. Use
//! [`Ascending`] or [`Descending`] for `T: Ord`, or pass any
//! `Fn(&T, &T) -> bool` closure.
//!
//! ```
//! use nexus_containers::Heap;
//!
//! let mut min = Heap::min();
//! let mut max = Heap::max();
//! for v in [3, 4, 2, 6, 7, 1, 8, 5] {
//!     min.insert(v);
//!     max.insert(v);
//! }
//!
//! let ascending: Vec<_> = std::iter::from_fn(|| min.remove()).collect();
//! let descending: Vec<_> = std::iter::from_fn(|| max.remove()).collect();
//! assert_eq!(ascending, [1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(descending, [8, 7, 6, 5, 4, 3, 2, 1]);
//! ```
//!
//! # Linked List
//!
//! Nodes live in a slab arena and are linked by key around a sentinel, so
//! the ring is never null and never forms an ownership cycle.
//!
//! ```
//! use nexus_containers::list;
//!
//! let mut list = list![1, 2, 6];
//! list.insert(2, 5).unwrap();
//! assert_eq!(list.to_string(), "[1, 2, 5, 6]");
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_back(), Some(6));
//! assert_eq!(list[1], 5);
//! ```
//!
//! # Errors
//!
//! Indexed list operations report out-of-range positions as
//! [`OutOfBounds`] (or [`InsertError`], which hands the value back).
//! Only the `list[i]` operator panics.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod list;
pub mod order;
pub mod safe_index;

pub use error::{InsertError, OutOfBounds};
pub use heap::Heap;
pub use list::{IntoIter, Iter, IterMut, LinkedList};
pub use order::{Ascending, Descending, Order};
pub use safe_index::SafeIndex;
