use std::fmt;

/// Marker written in front of every element by the containers' `Display` impls.
pub const SEPARATOR: &str = "::";

pub trait ContainerCommon {
    fn len(&self) -> usize;

    /// Unbounded containers report `usize::MAX`.
    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Writes `::a::b::c` for the items `a, b, c`; writes nothing for no items.
pub(crate) fn fmt_prefixed<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .try_for_each(|item| write!(f, "{SEPARATOR}{item}"))
}
