use std::{fmt, iter::FusedIterator, vec};

/// Owning, one-shot iterator over the elements a container held when the
/// snapshot was taken. Later mutation of the container is not observed.
pub struct Snapshot<T> {
    items: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    #[inline]
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T: Clone> Clone for Snapshot<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.as_slice()).finish()
    }
}

impl<T> AsRef<[T]> for Snapshot<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FusedIterator for Snapshot<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_order_once() {
        let mut snapshot = Snapshot::new(vec![-1, 3, 4]);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.next(), Some(-1));
        assert_eq!(snapshot.as_slice(), &[3, 4]);
        assert_eq!(snapshot.next_back(), Some(4));
        assert_eq!(snapshot.next(), Some(3));
        assert_eq!(snapshot.next(), None);
        assert_eq!(snapshot.next(), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = Snapshot::new(vec![1, 2]);
        let b = a.clone();
        a.next();
        assert_eq!(a.count(), 1);
        assert_eq!(b.sum::<i32>(), 3);
        assert_eq!(format!("{:?}", Snapshot::new(vec![1])), "Snapshot([1])");
    }
}
