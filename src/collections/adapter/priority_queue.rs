use std::{cmp::Ordering, fmt, slice};

use crate::collections::adapter::{
    ContainerCommon, Snapshot, container_common::fmt_prefixed, ordering::impl_sequence_ord,
};

/// Decides whether `lhs` should come before `rhs` in a [`PriorityQueue`].
///
/// `before` must be a strict weak order: irreflexive, transitive, and with
/// "neither comes before the other" transitive as well. If it is not, for
/// example [`Ascending`] over floats that include NaN, the queue's order after
/// a push is unspecified and the sort may panic.
pub trait Comparator<T: ?Sized> {
    fn before(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// Smallest element first, by `T`'s `<`.
///
/// Only a valid [`Comparator`] when `<` is a strict weak order over the values
/// pushed, which rules out NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: PartialOrd + ?Sized> Comparator<T> for Ascending {
    #[inline]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// Greatest element first, by `T`'s `>`. The same NaN caveat as
/// [`Ascending`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> Comparator<T> for Descending {
    #[inline]
    fn before(&self, lhs: &T, rhs: &T) -> bool {
        lhs > rhs
    }
}

/// Priority queue kept as a sorted `Vec`.
///
/// Every [`push`](Self::push) appends and then stable-sorts the whole backing
/// sequence with the comparator, so insertion costs O(n log n) and elements
/// the comparator considers tied stay in insertion order. The front of the
/// sequence is the next element to [`pop`](Self::pop).
///
/// The comparison operators (`==`, `<`, ...) compare the sorted sequences
/// position by position using `T`'s own `PartialEq`/`PartialOrd`. They ignore
/// the comparator, so two queues sorted in opposite directions compare by
/// their storage order, not by priority.
#[derive(Clone)]
pub struct PriorityQueue<T, C = Ascending> {
    items: Vec<T>,
    comparator: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    #[inline]
    pub const fn new(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
        let comparator = &self.comparator;
        self.items.sort_by(|lhs, rhs| ordering_of(comparator, lhs, rhs));
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        (!self.items.is_empty()).then(|| self.items.remove(0))
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn pop_all(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.pop_all();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone, C: Comparator<T>> PriorityQueue<T, C> {
    #[inline]
    pub fn as_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.items.clone())
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new(C::default())
    }
}

#[inline]
fn ordering_of<T, C: Comparator<T>>(comparator: &C, lhs: &T, rhs: &T) -> Ordering {
    if comparator.before(lhs, rhs) {
        Ordering::Less
    } else if comparator.before(rhs, lhs) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T, C: Comparator<T>> ContainerCommon for PriorityQueue<T, C> {
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

impl_sequence_ord!(PriorityQueue<T, C>);

impl<T: fmt::Display, C> fmt::Display for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, &self.items)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.items)
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
