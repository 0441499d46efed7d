use std::{cell::RefCell, fmt, rc::Rc};

use crate::collections::adapter::{ContainerCommon, Snapshot, container_common::fmt_prefixed};

/// Last-in-first-out stack whose clones share storage.
///
/// The top is the end of the backing `Vec`; [`snapshot`](Self::snapshot) and
/// `Display` run bottom to top.
pub struct SharedStack<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedStack<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    #[inline]
    pub fn push(&self, value: T) {
        self.items.borrow_mut().push(value);
    }

    #[inline]
    pub fn pop(&self) -> Option<T> {
        self.items.borrow_mut().pop()
    }

    #[inline]
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Reverses the order for every handle: the top becomes the bottom.
    #[inline]
    pub fn reverse_in_place(&self) {
        self.items.borrow_mut().reverse();
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> SharedStack<T> {
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.items.borrow().last().cloned()
    }

    #[inline]
    pub fn as_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.as_vec())
    }

    pub fn duplicate(&self) -> Self {
        Self {
            items: Rc::new(RefCell::new(self.as_vec())),
        }
    }
}

impl<T> Clone for SharedStack<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for SharedStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for SharedStack<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T: fmt::Display> fmt::Display for SharedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, self.items.borrow().iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("SharedStack");
        match self.items.try_borrow() {
            Ok(items) => d.field("items", &*items),
            Err(_) => d.field("items", &format_args!("<borrowed>")),
        };
        d.finish()
    }
}

impl<T> FromIterator<T> for SharedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::from_iter(iter))),
        }
    }
}

impl<T: Clone> IntoIterator for &SharedStack<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SharedStack<i32> {
        let stack = SharedStack::new();
        stack.push(-1);
        stack.push(3);
        stack
    }

    #[test]
    fn init() {
        let stack = SharedStack::<i32>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn push_pop_peek() {
        let stack = sample();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(-1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn clear_twice() {
        let stack = sample();
        stack.clear();
        stack.clear();
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn reverse_in_place_is_visible_to_all_handles() {
        let stack = sample();
        let alias = stack.clone();
        alias.reverse_in_place();
        assert_eq!(stack.peek(), Some(-1));
        assert_eq!(stack.as_vec(), vec![3, -1]);
        assert_eq!(stack.to_string(), "::3::-1");
    }

    #[test]
    fn iteration_is_bottom_to_top() {
        let stack = sample();
        let mut seen = Vec::new();
        for item in &stack {
            seen.push(item);
            stack.pop();
        }
        assert_eq!(seen, vec![-1, 3]);
        assert!(stack.is_empty());
    }

    #[test]
    fn duplicate_is_independent() {
        let stack = sample();
        let copy = stack.duplicate();
        stack.push(4);
        assert_eq!(stack.len(), 3);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.peek(), Some(3));
        assert!(!copy.ptr_eq(&stack));
        assert!(stack.clone().ptr_eq(&stack));
    }

    #[test]
    fn debug() {
        let stack: SharedStack<_> = [1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", stack), "SharedStack { items: [1, 2] }");
    }
}
