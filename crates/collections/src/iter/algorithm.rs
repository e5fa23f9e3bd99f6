//! Generic cursor algorithms
//!
//! [`copy`] and [`copy_n`] move elements from any read cursor into any
//! output cursor, so the same call can fill a slice, append to a vector, or
//! prepend to a deque. [`CursorRange`] bridges a `[first, last)` cursor pair
//! into a standard [`Iterator`].

use core::iter::FusedIterator;

use super::traits::{BidirectionalCursor, OutputCursor, ReadCursor};

/// Assigns every element of `[first, last)` to `out` in order
///
/// Returns the output cursor after the last write.
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{back_inserter, begin, copy, end};
///
/// let source = [1, 2, 3];
/// let mut target = Vec::new();
/// copy(begin(&source), end(&source), back_inserter(&mut target));
/// assert_eq!(target, [&1, &2, &3]);
/// ```
pub fn copy<I, O>(mut first: I, last: I, mut out: O) -> O
where
    I: ReadCursor,
    O: OutputCursor<I::Reference>,
{
    while first != last {
        out.put(first.read());
        first.increment();
    }
    out
}

/// Assigns `count` elements starting at `first` to `out`
pub fn copy_n<I, O>(mut first: I, count: usize, mut out: O) -> O
where
    I: ReadCursor,
    O: OutputCursor<I::Reference>,
{
    for _ in 0..count {
        out.put(first.read());
        first.increment();
    }
    out
}

/// Iterator over the cursor range `[first, last)`
///
/// Yields what the cursor reads. Reversible when the cursor is
/// bidirectional.
#[derive(Debug, Clone)]
pub struct CursorRange<I> {
    first: I,
    last: I,
}

/// Iterator over `[first, last)`
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{range, rbegin, rend};
///
/// let data = [1, 2, 3];
/// let reversed: Vec<i32> = range(rbegin(&data), rend(&data)).copied().collect();
/// assert_eq!(reversed, [3, 2, 1]);
/// ```
#[inline]
pub fn range<I: ReadCursor>(first: I, last: I) -> CursorRange<I> {
    CursorRange { first, last }
}

impl<I> CursorRange<I> {
    /// Splits the range back into its cursors
    pub fn into_bounds(self) -> (I, I) {
        (self.first, self.last)
    }
}

impl<I: ReadCursor> Iterator for CursorRange<I> {
    type Item = I::Reference;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        let item = self.first.read();
        self.first.increment();
        Some(item)
    }
}

impl<I: ReadCursor + BidirectionalCursor> DoubleEndedIterator for CursorRange<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.first == self.last {
            return None;
        }
        self.last.decrement();
        Some(self.last.read())
    }
}

impl<I: ReadCursor> FusedIterator for CursorRange<I> {}
