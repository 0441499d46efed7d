use std::ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    #[error("range start index {start} out of range for length {len}")]
    StartOutOfBounds { start: usize, len: usize },
    #[error("range starts at {start} but ends at {end}")]
    Empty { start: usize, end: usize },
    #[error("range end index {end} out of range for length {len}")]
    EndOutOfBounds { end: usize, len: usize },
}

/// Resolves `range` against a sequence of length `bounds.end`.
///
/// Unlike slice indexing, the resolved range must be non-empty and must start
/// inside the sequence, so `len..len` and `i..i` are both rejected.
pub fn erase_range<R>(range: R, bounds: ops::RangeTo<usize>) -> Result<ops::Range<usize>, RangeError>
where
    R: ops::RangeBounds<usize>,
{
    let len = bounds.end;

    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(&start) => start.saturating_add(1),
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(&end) => end.saturating_add(1),
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start >= len {
        return Err(RangeError::StartOutOfBounds { start, len });
    }
    if end <= start {
        return Err(RangeError::Empty { start, end });
    }
    if end > len {
        return Err(RangeError::EndOutOfBounds { end, len });
    }

    Ok(ops::Range { start, end })
}
