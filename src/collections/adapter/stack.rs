use std::{fmt, slice};

use crate::collections::adapter::{
    ContainerCommon, Snapshot, container_common::fmt_prefixed, ordering::impl_sequence_ord,
};

/// Unbounded last-in-first-out stack with value semantics.
///
/// The top is the last index of the backing `Vec`. Iteration, `Display` and
/// `as_vec` all follow storage order, bottom to top.
///
/// The comparison operators walk both stacks from the bottom and stop at the
/// first pair of elements that differ. A strict prefix is therefore neither
/// less nor greater than the longer stack: `<=` and `>=` both hold while the
/// two are not equal, and `partial_cmp` returns `None`.
#[derive(Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
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
        self.items.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
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

    /// Bottom to top.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a new stack with the order reversed: the current top becomes
    /// the bottom.
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

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for Stack<T> {
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

impl_sequence_ord!(Stack<T>);

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, &self.items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("items", &self.items).finish()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// The last element of `items` becomes the top.
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Snapshot::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn sample() -> Stack<i32> {
        let mut stack = Stack::new();
        stack.push(-1);
        stack.push(3);
        stack
    }

    fn stack(items: &[i32]) -> Stack<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn init() {
        let stack = Stack::<i32>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
        assert_eq!(stack.to_string(), "");
    }

    #[test]
    fn size() {
        let mut stack = sample();
        stack.push(4);
        assert_eq!(stack.len(), 3);
        stack.pop();
        assert_eq!(stack.len(), 2);
        stack.clear();
        stack.clear();
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = sample();
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(-1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn top_mut() {
        let mut stack = sample();
        if let Some(top) = stack.top_mut() {
            *top += 1;
        }
        assert_eq!(stack.top(), Some(&4));
    }

    #[test]
    fn iteration_is_bottom_to_top() {
        let stack = sample();
        assert_eq!(stack.to_string(), "::-1::3");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![-1, 3]);
        assert_eq!(stack.snapshot().collect::<Vec<_>>(), vec![-1, 3]);
        assert_eq!(stack.as_vec(), vec![-1, 3]);
        assert_eq!(stack.into_iter().next(), Some(-1));
    }

    #[test]
    fn reverse_does_not_mutate() {
        let stack = sample();
        let reversed = stack.reverse();
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(reversed.top(), Some(&-1));
        assert_eq!(reversed.as_vec(), vec![3, -1]);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = sample();
        let b = a.clone();
        a.pop();
        assert_eq!(b.top(), Some(&3));
    }

    #[test]
    fn relational_operators() {
        let a = sample();
        assert!(a == stack(&[-1, 3]));
        assert!(a != stack(&[-1]));
        assert!(a < stack(&[2, 3]));
        assert!(!(a < stack(&[-1])));
        assert!(!(a > stack(&[-1])));
        assert!(a > stack(&[-2]));
        assert!(a <= stack(&[-1, 3]));
        assert!(a >= stack(&[-1]));
    }

    #[test]
    fn prefix_is_neither_less_nor_greater() {
        let short = stack(&[-1]);
        let long = stack(&[-1, 3]);
        assert!(!(short < long) && !(short > long));
        assert!(short <= long && short >= long);
        assert!(short != long);
        assert_eq!(short.partial_cmp(&long), None);
    }

    #[test]
    fn equal_stacks_hash_alike() {
        let mut popped = stack(&[-1, 3, 4]);
        popped.pop();
        let set: HashSet<_> = [popped, sample()].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(!set.contains(&stack(&[3, -1])));
    }

    proptest! {
        #[test]
        fn pops_in_reverse_push_order(values: Vec<i32>) {
            let mut stack = Stack::new();
            for value in &values {
                stack.push(*value);
            }
            let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
            let expected: Vec<_> = values.into_iter().rev().collect();
            prop_assert_eq!(popped, expected);
        }
    }
}
