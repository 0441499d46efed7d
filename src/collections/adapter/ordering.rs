//! Element-wise comparison shared by the sequence containers.
//!
//! `lt` stops at the first index where one element is ordered before the
//! other. When one side runs out of elements first the result is `false`, so a
//! strict prefix is neither less nor greater than the longer sequence. The
//! containers derive `>`, `<=` and `>=` from `lt` alone:
//!
//! - `a > b` is `b < a`
//! - `a <= b` is `!(b < a)`
//! - `a >= b` is `!(a < b)`
//!
//! which makes `[-1] <= [-1, 3]` and `[-1] >= [-1, 3]` both true while the two
//! are not equal.

use std::cmp::Ordering;

pub(crate) fn lt<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if a < b {
            return true;
        } else if b < a {
            return false;
        }
    }
    false
}

pub(crate) fn partial_cmp<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> Option<Ordering> {
    if lt(lhs, rhs) {
        Some(Ordering::Less)
    } else if lt(rhs, lhs) {
        Some(Ordering::Greater)
    } else if lhs == rhs {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Implements `PartialEq`, `Eq`, `Hash` and `PartialOrd` for a container
/// whose backing `Vec` lives in the field `items`.
macro_rules! impl_sequence_ord {
    ($name:ident<T $(, $param:ident)*>) => {
        impl<T: PartialEq $(, $param)*> PartialEq for $name<T $(, $param)*> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.items == other.items
            }
        }

        impl<T: Eq $(, $param)*> Eq for $name<T $(, $param)*> {}

        impl<T: std::hash::Hash $(, $param)*> std::hash::Hash for $name<T $(, $param)*> {
            #[inline]
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.items.hash(state);
            }
        }

        impl<T: PartialOrd $(, $param)*> PartialOrd for $name<T $(, $param)*> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                $crate::collections::adapter::ordering::partial_cmp(&self.items, &other.items)
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                $crate::collections::adapter::ordering::lt(&self.items, &other.items)
            }

            #[inline]
            fn gt(&self, other: &Self) -> bool {
                $crate::collections::adapter::ordering::lt(&other.items, &self.items)
            }

            #[inline]
            fn le(&self, other: &Self) -> bool {
                !$crate::collections::adapter::ordering::lt(&other.items, &self.items)
            }

            #[inline]
            fn ge(&self, other: &Self) -> bool {
                !$crate::collections::adapter::ordering::lt(&self.items, &other.items)
            }
        }
    };
}

pub(crate) use impl_sequence_ord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_difference_decides() {
        assert!(lt(&[-1, 3], &[2, 3]));
        assert!(!lt(&[2, 3], &[-1, 3]));
        assert!(!lt(&[-1, 3], &[-2]));
        assert!(lt(&[-2], &[-1, 3]));
    }

    #[test]
    fn prefix_is_not_less() {
        assert!(!lt(&[-1], &[-1, 3]));
        assert!(!lt(&[-1, 3], &[-1]));
        assert_eq!(partial_cmp(&[-1], &[-1, 3]), None);
        assert_eq!(partial_cmp::<i32>(&[], &[]), Some(Ordering::Equal));
    }

    #[test]
    fn incomparable_elements_are_skipped() {
        assert!(lt(&[f64::NAN, 1.0], &[f64::NAN, 2.0]));
        assert_eq!(partial_cmp(&[f64::NAN], &[f64::NAN]), None);
    }
}
