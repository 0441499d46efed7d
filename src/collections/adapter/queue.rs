use std::{fmt, slice};

use crate::collections::adapter::{
    ContainerCommon, Snapshot, container_common::fmt_prefixed, ordering::impl_sequence_ord,
};

/// Unbounded first-in-first-out queue with value semantics.
///
/// The front (oldest element) is index 0 of the backing `Vec`, the back is the
/// last index.
///
/// The comparison operators walk both queues from the front and stop at the
/// first pair of elements that differ. A strict prefix is therefore neither
/// less nor greater than the longer queue: `<=` and `>=` both hold while the
/// two are not equal, and `partial_cmp` returns `None`.
#[derive(Clone)]
pub struct Queue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> {
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
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        (!self.items.is_empty()).then(|| self.items.remove(0))
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

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Queue<T> {
    #[inline]
    pub fn as_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.items.clone())
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for Queue<T> {
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

impl_sequence_ord!(Queue<T>);

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, &self.items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("items", &self.items).finish()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
