use std::{cell::RefCell, fmt, num::NonZeroUsize, rc::Rc};

use crate::collections::adapter::{ContainerCommon, Snapshot, container_common::fmt_prefixed};

pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CapacityError {
    #[error("bounded queue capacity must be at least 1")]
    Zero,
}

/// First-in-first-out queue that holds at most `capacity` elements.
///
/// A push that takes the queue past its capacity evicts the oldest element.
/// Clones share the same storage; use [`duplicate`](Self::duplicate) for an
/// independent copy.
pub struct BoundedQueue<T> {
    items: Rc<RefCell<Vec<T>>>,
    capacity: NonZeroUsize,
}

impl<T> BoundedQueue<T> {
    /// An empty queue with [`DEFAULT_CAPACITY`].
    #[inline]
    pub fn new() -> Self {
        Self::from_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        NonZeroUsize::new(capacity)
            .map(Self::from_capacity)
            .ok_or(CapacityError::Zero)
    }

    #[inline]
    pub fn from_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::with_capacity(capacity.get()))),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
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
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Appends `value` at the back. If that exceeds the capacity the front
    /// element is evicted and returned.
    pub fn push(&self, value: T) -> Option<T> {
        let mut items = self.items.borrow_mut();
        items.push(value);
        (items.len() > self.capacity.get()).then(|| items.remove(0))
    }

    pub fn pop(&self) -> Option<T> {
        let mut items = self.items.borrow_mut();
        (!items.is_empty()).then(|| items.remove(0))
    }

    #[inline]
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Whether both handles share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// The front (oldest) element.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.items.borrow().first().cloned()
    }

    /// The back (newest) element.
    #[inline]
    pub fn bottom_peek(&self) -> Option<T> {
        self.items.borrow().last().cloned()
    }

    #[inline]
    pub fn as_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// Front to back, as the queue is right now.
    #[inline]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.as_vec())
    }

    pub fn duplicate(&self) -> Self {
        Self {
            items: Rc::new(RefCell::new(self.as_vec())),
            capacity: self.capacity,
        }
    }
}

impl<T> Clone for BoundedQueue<T> {
    /// Returns another handle to the same storage.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            capacity: self.capacity,
        }
    }
}

impl<T> Default for BoundedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for BoundedQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prefixed(f, self.items.borrow().iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("BoundedQueue");
        d.field("capacity", &self.capacity);
        match self.items.try_borrow() {
            Ok(items) => d.field("items", &*items),
            Err(_) => d.field("items", &format_args!("<borrowed>")),
        };
        d.finish()
    }
}

impl<T: Clone> IntoIterator for &BoundedQueue<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}
