//! Doubly-linked list with positional access.
//!
//! Nodes live in a [`slab::Slab`] arena and link to each other by slab key.
//! A payload-free sentinel closes the ring: its `next` is the first node
//! and its `prev` the last, and an empty list is the sentinel linked to
//! itself. No link is ever null, so push, pop and splice need no end-of-list
//! special cases.
//!
//! Links are plain indices. Neither direction owns a node; the arena owns
//! them all, so dropping the list or removing a node can never leak through
//! a cycle.
//!
//! # Positional Access
//!
//! Indexed operations walk from whichever end is closer: index `i` is
//! reached in `min(i, len - 1 - i)` steps.
//!
//! ```
//! use nexus_containers::{LinkedList, OutOfBounds};
//!
//! let mut list = LinkedList::new();
//! list.push_front(2);
//! list.push_back(5);
//! list.push_front(1);
//! list.push_back(6);
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.last(), Some(&6));
//! assert_eq!(list[2], 5);
//!
//! assert_eq!(list.remove(2), Ok(5));
//! assert_eq!(list.to_string(), "[1, 2, 6]");
//!
//! // Out-of-range indices are reported, never clamped.
//! assert_eq!(list.remove(3), Err(OutOfBounds { index: 3, len: 3 }));
//! ```
//!
//! # Literals
//!
//! ```
//! use nexus_containers::list;
//!
//! let list = list!["a", "b", "c"];
//! assert_eq!(list[0], "a");
//! assert_eq!(list.last(), Some(&"c"));
//!
//! let collected: Vec<_> = list.iter().copied().collect();
//! assert_eq!(collected, ["a", "b", "c"]);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

use log::{debug, trace};
use slab::Slab;

use crate::{InsertError, OutOfBounds, SafeIndex};

/// Key of the sentinel node. Never handed out by the slab.
const SENTINEL: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Links {
    next: usize,
    prev: usize,
}

impl Links {
    /// Links of a sentinel with no payload nodes.
    const RING: Self = Self {
        next: SENTINEL,
        prev: SENTINEL,
    };
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    links: Links,
}

/// A doubly-linked list with O(1) endpoint operations and nearest-end
/// positional access.
///
/// # Example
///
/// ```
/// use nexus_containers::LinkedList;
///
/// let mut list: LinkedList<u32> = [1, 3].into();
/// list.insert(1, 2).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_front(), Some(2));
/// assert_eq!(list.pop_front(), None);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    sentinel: Links,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            sentinel: Links::RING,
            len: 0,
        }
    }

    /// Creates an empty list with arena room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            sentinel: Links::RING,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Returns a reference to the first element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.value(self.sentinel.next)
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.sentinel.next)
    }

    /// Returns a reference to the last element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.value(self.sentinel.prev)
    }

    /// Returns a mutable reference to the last element.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.sentinel.prev)
    }

    /// Adds an element at the front of the list. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.splice(SENTINEL, self.sentinel.next, value);
    }

    /// Adds an element at the back of the list. O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.splice(self.sentinel.prev, SENTINEL, value);
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the list is empty. O(1).
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.unsplice(self.sentinel.next))
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the list is empty. O(1).
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.unsplice(self.sentinel.prev))
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        let key = self.checked_key(index)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfBounds> {
        let key = self.checked_key(index)?;
        Ok(&mut self.nodes[key].value)
    }

    /// Inserts an element so that it ends up at `index`.
    ///
    /// Inserting at `0` or `len` is O(1); anywhere else walks to the node
    /// at `index - 1` from the nearer end and splices after it.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError`] holding `value` if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        if index > self.len {
            debug!(
                "rejected list insert at index {} (len {})",
                index, self.len
            );
            return Err(InsertError {
                value,
                index,
                len: self.len,
            });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let prev = self.key_at(index - 1);
            let next = self.nodes[prev].links.next;
            self.splice(prev, next, value);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfBounds> {
        let key = self.checked_key(index)?;
        Ok(self.unsplice(key))
    }

    /// Removes every element.
    ///
    /// The ring is reset by relinking the sentinel to itself; element
    /// destructors still run.
    pub fn clear(&mut self) {
        trace!("clearing list, releasing {} nodes", self.len);
        self.nodes.clear();
        self.sentinel = Links::RING;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.sentinel.next,
            back: self.sentinel.prev,
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.sentinel.next,
            back: self.sentinel.prev,
            remaining: self.len,
            nodes: &mut self.nodes,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn links(&self, key: usize) -> &Links {
        if key == SENTINEL {
            &self.sentinel
        } else {
            &self.nodes[key].links
        }
    }

    #[inline]
    fn links_mut(&mut self, key: usize) -> &mut Links {
        if key == SENTINEL {
            &mut self.sentinel
        } else {
            &mut self.nodes[key].links
        }
    }

    #[inline]
    fn value(&self, key: usize) -> Option<&T> {
        if key == SENTINEL {
            None
        } else {
            Some(&self.nodes[key].value)
        }
    }

    #[inline]
    fn value_mut(&mut self, key: usize) -> Option<&mut T> {
        if key == SENTINEL {
            None
        } else {
            Some(&mut self.nodes[key].value)
        }
    }

    /// Allocates a node for `value` between the adjacent `prev` and `next`.
    #[inline]
    fn splice(&mut self, prev: usize, next: usize, value: T) {
        debug_assert_eq!(self.links(prev).next, next);

        let key = self.nodes.insert(Node {
            value,
            links: Links { next, prev },
        });
        debug_assert_ne!(key, SENTINEL);

        self.links_mut(prev).next = key;
        self.links_mut(next).prev = key;
        self.len += 1;
    }

    /// Links the neighbours of `key` to each other and frees its node.
    #[inline]
    fn unsplice(&mut self, key: usize) -> T {
        let Node { value, links } = self.nodes.remove(key);
        self.links_mut(links.prev).next = links.next;
        self.links_mut(links.next).prev = links.prev;
        self.len -= 1;
        value
    }

    /// Key of the node at `index`, walking from the nearer end.
    ///
    /// `index` must be `< len`.
    fn key_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index <= self.len / 2 {
            let mut key = self.sentinel.next;
            for _ in 0..index {
                key = self.nodes[key].links.next;
            }
            key
        } else {
            let mut key = self.sentinel.prev;
            for _ in 0..(self.len - 1 - index) {
                key = self.nodes[key].links.prev;
            }
            key
        }
    }

    fn checked_key(&self, index: usize) -> Result<usize, OutOfBounds> {
        if index < self.len {
            return Ok(self.key_at(index));
        }

        let err = OutOfBounds {
            index,
            len: self.len,
        };
        debug!("rejected list access: {err}");
        Err(err)
    }
}

impl<T> SafeIndex for LinkedList<T> {
    type Output = T;

    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.nodes[self.key_at(index)].value)
        } else {
            None
        }
    }
}

// =============================================================================
// Operators and conversions
// =============================================================================

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = LinkedList::with_capacity(N);
        list.extend(values);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

/// Builds a [`LinkedList`] from its elements, in order.
///
/// ```
/// use nexus_containers::{LinkedList, list};
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.len(), 3);
///
/// let empty: LinkedList<u8> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::LinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::LinkedList::from([$($value),+])
    };
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
///
/// Walks `next` links from the first node until it returns to the sentinel.
/// Reversible through `prev` links.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.front];
        self.front = node.links.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.nodes[self.back];
        self.back = node.links.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T> {
    nodes: &'a mut Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &mut self.nodes[self.front];
        self.front = node.links.next;
        self.remaining -= 1;

        // Safety: `remaining` bounds the walk so each node is yielded once,
        // and the slab is not reallocated while the iterator borrows it.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &mut self.nodes[self.back];
        self.back = node.links.prev;
        self.remaining -= 1;

        // Safety: see `next`; front and back never cross while remaining > 0.
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over list elements.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the ring both ways and checks it against `len`.
    fn assert_ring<T>(list: &LinkedList<T>) {
        let mut forward = 0;
        let mut key = list.sentinel.next;
        while key != SENTINEL {
            let next = list.nodes[key].links.next;
            assert_eq!(list.links(next).prev, key, "prev of {next} is not {key}");
            forward += 1;
            key = next;
        }
        assert_eq!(forward, list.len);

        let mut backward = 0;
        let mut key = list.sentinel.prev;
        while key != SENTINEL {
            backward += 1;
            key = list.nodes[key].links.prev;
        }
        assert_eq!(backward, list.len);
        assert_eq!(list.nodes.len(), list.len);
    }

    fn values<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: LinkedList<u64> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.sentinel, Links::RING);
    }

    #[test]
    fn push_front_and_back_mixed() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(5);
        list.push_front(1);
        list.push_back(6);

        assert_eq!(list.len(), 4);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&6));
        assert_eq!(values(&list), [1, 2, 5, 6]);
        assert_ring(&list);
    }

    #[test]
    fn single_element_is_first_and_last() {
        let mut list = LinkedList::new();
        list.push_back("str");
        assert!(!list.is_empty());
        assert_eq!(list.first(), list.last());
        assert_eq!(list.sentinel.next, list.sentinel.prev);
        assert_ring(&list);
    }

    #[test]
    fn get_every_index() {
        let list: LinkedList<_> = (0..11).collect();
        for i in 0..11 {
            assert_eq!(list.get(i), Ok(&i));
            assert_eq!(list[i], i);
        }
        assert_eq!(list.get(11), Err(OutOfBounds { index: 11, len: 11 }));
    }

    #[test]
    fn key_at_walks_from_nearer_end() {
        let list: LinkedList<_> = (0..6).collect();
        // 6 / 2 = 3: indices 0..=3 walk forward, 4..=5 walk backward.
        assert_eq!(list.key_at(0), list.sentinel.next);
        assert_eq!(list.key_at(5), list.sentinel.prev);
        assert_eq!(list.key_at(4), list.nodes[list.sentinel.prev].links.prev);
        for i in 0..6 {
            assert_eq!(list.nodes[list.key_at(i)].value, i);
        }
    }

    #[test]
    fn get_mut_and_index_mut() {
        let mut list = LinkedList::from([1, 2, 3]);
        *list.get_mut(0).unwrap() = 10;
        list[2] = 30;
        if let Some(v) = list.first_mut() {
            *v += 1;
        }
        if let Some(v) = list.last_mut() {
            *v += 1;
        }
        assert_eq!(values(&list), [11, 2, 31]);
        assert!(list.get_mut(3).is_err());
    }

    #[test]
    fn insert_at_ends_and_middle() {
        let mut list = LinkedList::new();
        list.insert(0, 3).unwrap();
        list.insert(0, 1).unwrap();
        list.insert(1, 2).unwrap();
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.len(), 3);

        list.insert(3, 4).unwrap();
        assert_eq!(values(&list), [1, 2, 3, 4]);
        assert_ring(&list);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.first(), Some(&2));
    }

    #[test]
    fn insert_past_end_returns_value() {
        let mut list = LinkedList::from([1]);
        let err = list.insert(5, 99).unwrap_err();
        assert_eq!(err.bounds(), OutOfBounds { index: 5, len: 1 });
        assert_eq!(err.into_inner(), 99);
        assert_eq!(list.len(), 1);
        assert_ring(&list);
    }

    #[test]
    fn insert_walks_from_back() {
        let mut list: LinkedList<_> = (0..10).collect();
        list.insert(8, 100).unwrap();
        assert_eq!(list[7], 7);
        assert_eq!(list[8], 100);
        assert_eq!(list[9], 8);
        assert_ring(&list);
    }

    #[test]
    fn remove_middle() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(5);
        list.push_back(6);
        list.push_front(1);

        assert_eq!(list.remove(2), Ok(5));
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&6));
        assert_eq!(list.len(), 3);
        assert_ring(&list);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list = LinkedList::from([1, 2]);
        assert_eq!(list.remove(2), Err(OutOfBounds { index: 2, len: 2 }));

        let mut empty: LinkedList<u8> = LinkedList::new();
        assert_eq!(empty.remove(0), Err(OutOfBounds { index: 0, len: 0 }));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn pop_front_until_empty() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(5);
        list.push_front(1);
        list.push_back(6);

        for (expected, len) in [(1, 3), (2, 2), (5, 1), (6, 0)] {
            assert_eq!(list.pop_front(), Some(expected));
            assert_eq!(list.len(), len);
            assert_ring(&list);
        }
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.sentinel, Links::RING);
    }

    #[test]
    fn pop_back_until_empty() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(5);
        list.push_front(1);
        list.push_back(6);

        for (expected, len) in [(6, 3), (5, 2), (2, 1), (1, 0)] {
            assert_eq!(list.pop_back(), Some(expected));
            assert_eq!(list.len(), len);
            assert_ring(&list);
        }
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn clear_resets_ring() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(5);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.sentinel, Links::RING);
        assert_ring(&list);

        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.first(), Some(&1));
    }

    #[test]
    fn clear_drops_elements() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut list = LinkedList::new();
        for _ in 0..5 {
            list.push_back(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        list.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn drop_releases_every_node() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = LinkedList::new();
            for _ in 0..8 {
                list.push_front(Rc::clone(&tracker));
            }
            list.remove(3).unwrap();
            assert_eq!(Rc::strong_count(&tracker), 8);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn slots_are_reused() {
        let mut list = LinkedList::with_capacity(4);
        for i in 0..4 {
            list.push_back(i);
        }
        let capacity = list.capacity();
        for i in 0..100 {
            list.pop_front();
            list.push_back(i);
        }
        assert_eq!(list.capacity(), capacity);
        assert_eq!(values(&list), [96, 97, 98, 99]);
        assert_ring(&list);
    }

    #[test]
    fn iterate_both_directions() {
        let list = LinkedList::from([1, 2, 3, 4]);
        let forward: Vec<_> = list.iter().copied().collect();
        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(forward, [1, 2, 3, 4]);
        assert_eq!(backward, [4, 3, 2, 1]);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_is_restartable() {
        let list = LinkedList::from(["x", "y"]);
        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);

        let iter = list.iter();
        let copy = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(copy.count(), 2);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list = LinkedList::from([1, 2, 3]);
        for v in list.iter_mut() {
            *v *= 10;
        }
        for v in &mut list {
            *v += 1;
        }
        assert_eq!(values(&list), [11, 21, 31]);

        let mut iter = list.iter_mut();
        *iter.next_back().unwrap() = 0;
        assert_eq!(list.last(), Some(&0));
    }

    #[test]
    fn into_iter_both_ends() {
        let list = LinkedList::from([1, 2, 3]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn enumerate_matches_source() {
        let source = [1, 2, 3, 4, 5, 6];
        let list = LinkedList::from(source);
        assert_eq!(list[3], 4);
        for (i, v) in list.iter().enumerate() {
            assert_eq!(source[i], *v);
        }
    }

    #[test]
    fn literal_macro() {
        let list = list!["a", "b", "c"];
        assert_eq!(list[0], "a");
        assert_eq!(list[1], "b");
        assert_eq!(list[2], "c");
        assert_eq!(list.first(), Some(&"a"));
        assert_eq!(list.last(), Some(&"c"));

        let trailing = list![1, 2,];
        assert_eq!(trailing.len(), 2);

        let empty: LinkedList<i32> = list![];
        assert!(empty.is_empty());
    }

    #[test]
    fn extend_by_reference() {
        let mut list = LinkedList::from([1]);
        list.extend(&[2, 3]);
        assert_eq!(values(&list), [1, 2, 3]);
    }

    #[test]
    fn debug_and_display() {
        let list = LinkedList::from([1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        assert_eq!(list.to_string(), "[1, 2, 3]");

        let words = LinkedList::from(["a", "b"]);
        assert_eq!(format!("{words:?}"), r#"["a", "b"]"#);
        assert_eq!(words.to_string(), "[a, b]");

        let empty: LinkedList<u8> = LinkedList::new();
        assert_eq!(format!("{empty:?}"), "[]");
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn equality_ignores_arena_layout() {
        let a = LinkedList::from([1, 2, 3]);

        let mut b = LinkedList::new();
        b.push_back(0);
        b.push_back(3);
        b.push_front(2);
        b.push_front(1);
        b.remove(2).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, LinkedList::from([1, 2]));
    }

    #[test]
    fn clone_is_independent() {
        let mut original = LinkedList::from([1, 2]);
        let cloned = original.clone();
        original.push_back(3);
        original.pop_front();

        assert_eq!(values(&cloned), [1, 2]);
        assert_ring(&cloned);
    }

    #[test]
    fn safe_index_never_panics() {
        let list = LinkedList::from([1, 2, 3]);
        assert_eq!(list.at(0), Some(&1));
        assert_eq!(list.at(2), Some(&3));
        assert_eq!(list.at(3), None);
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn index_out_of_range_panics() {
        let list = LinkedList::from([1, 2, 3]);
        let _ = list[3];
    }
}
