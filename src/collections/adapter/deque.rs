use std::{fmt, ops, slice};

use crate::{
    collections::adapter::{
        ContainerCommon, Snapshot, container_common::fmt_prefixed, ordering::impl_sequence_ord,
    },
    slice::{RangeError, erase_range},
};

/// Double-ended queue over a contiguous `Vec`. The front is index 0.
///
/// The comparison operators walk both deques from the front and stop at the
/// first pair of elements that differ. A strict prefix is therefore neither
/// less nor greater than the longer deque: `<=` and `>=` both hold while the
/// two are not equal, and `partial_cmp` returns `None`.
#[derive(Clone)]
pub struct Deque<T> {
    items: Vec<T>,
}

impl<T> Deque<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.items.insert(0, value);
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        (!self.items.is_empty()).then(|| self.items.remove(0))
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes the element at `index`. Out-of-range indices leave the deque
    /// unchanged and return `None`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes the elements in `range`. A range that is empty, starts past the
    /// last element or ends past the length leaves the deque unchanged.
    #[inline]
    pub fn erase_range<R>(&mut self, range: R)
    where
        R: ops::RangeBounds<usize>,
    {
        let _ = self.try_erase_range(range);
    }

    /// Like [`erase_range`](Self::erase_range), but reports why a range was
    /// rejected.
    pub fn try_erase_range<R>(&mut self, range: R) -> Result<(), RangeError>
    where
        R: ops::RangeBounds<usize>,
    {
        let range = erase_range(range, ..self.items.len())?;
        self.items.drain(range);
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Deque<T> {
    /// Returns a new deque holding the elements in reverse order.
    pub fn reverse(&self) -> Self {
        Self {
            items: self.items.iter().rev().cloned().collect(),
        }
    }

    #[inline]
    pub fn as_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.items.clone())
    }
}

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for Deque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl_sequence_ord!(Deque<T>);

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, &self.items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque").field("items", &self.items).finish()
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    #[inline]
    fn from(value: Deque<T>) -> Self {
        value.items
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
