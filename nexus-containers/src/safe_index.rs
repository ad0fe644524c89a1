//! Bounds-checked positional lookup.

/// Lookup by position that returns `None` instead of panicking.
///
/// # Example
///
/// ```
/// use nexus_containers::SafeIndex;
///
/// let v = vec![10, 20, 30];
/// assert_eq!(v.at(1), Some(&20));
/// assert_eq!(v.at(3), None);
/// ```
pub trait SafeIndex {
    /// Element type.
    type Output: ?Sized;

    /// Returns the element at `index`, or `None` if out of range.
    fn at(&self, index: usize) -> Option<&Self::Output>;
}

impl<T> SafeIndex for [T] {
    type Output = T;

    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
