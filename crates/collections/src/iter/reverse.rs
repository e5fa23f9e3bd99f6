//! Reverse cursor adaptor
//!
//! A [`ReverseCursor`] walks its base cursor backwards. It stores the
//! position one past the element it designates: reading decrements a copy
//! of the base and reads that, so `ReverseCursor::new(end)` designates the
//! last element and `ReverseCursor::new(begin)` is the reversed end.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::cursor::{SliceCursor, begin, end};
use super::traits::{
    BidirectionalCursor, Cursor, DifferenceType, IteratorTraits, RandomAccessCursor, ReadCursor,
};

/// Cursor adaptor that reverses the direction of a bidirectional cursor
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{ReadCursor, ReverseCursor, begin, end};
///
/// let data = [1, 2, 3];
/// let last = ReverseCursor::new(end(&data));
/// assert_eq!(*last.read(), 3);
/// assert_eq!(*last.at(2), 1);
/// assert_eq!(last.base(), end(&data));
/// assert_eq!(ReverseCursor::new(begin(&data)) - last, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReverseCursor<I> {
    base: I,
}

impl<I> ReverseCursor<I> {
    /// Wraps `base`; the adaptor designates the element before it
    #[inline]
    pub fn new(base: I) -> Self {
        Self { base }
    }

    /// Unwraps the base cursor
    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I: Clone> ReverseCursor<I> {
    /// Copy of the base cursor (one past the designated element)
    #[inline]
    pub fn base(&self) -> I {
        self.base.clone()
    }
}

impl<I: ReadCursor + BidirectionalCursor> ReverseCursor<I> {
    /// Reads the designated element
    #[inline]
    pub fn get(&self) -> I::Reference {
        let mut at = self.base.clone();
        at.decrement();
        at.read()
    }
}

impl<I: ReadCursor + RandomAccessCursor> ReverseCursor<I> {
    /// Reads the element `n` positions further along the reversed order
    #[inline]
    pub fn at(&self, n: I::Difference) -> I::Reference {
        let mut at = self.base.clone();
        at.offset(-n - I::Difference::one());
        at.read()
    }
}

/// Reversed cursor at the last element of `slice`
#[inline]
pub fn rbegin<T>(slice: &[T]) -> ReverseCursor<SliceCursor<'_, T>> {
    ReverseCursor::new(end(slice))
}

/// Reversed end of `slice` (before its first element)
#[inline]
pub fn rend<T>(slice: &[T]) -> ReverseCursor<SliceCursor<'_, T>> {
    ReverseCursor::new(begin(slice))
}

// ============================================================================
// Cursor capabilities
// ============================================================================

impl<I: RandomAccessCursor> ReverseCursor<I> {
    /// Copy moved `n` positions back along the reversed order
    #[inline]
    #[must_use]
    pub fn back(&self, n: I::Difference) -> Self {
        let mut moved = self.clone();
        moved.offset(-n);
        moved
    }
}
impl<I: PartialEq> PartialEq for ReverseCursor<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<I: Eq> Eq for ReverseCursor<I> {}

impl<I: PartialOrd> PartialOrd for ReverseCursor<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<I: IteratorTraits> IteratorTraits for ReverseCursor<I> {
    type Value = I::Value;
    type Difference = I::Difference;
    type Pointer = I::Pointer;
    type Reference = I::Reference;
    type Category = I::Category;
}

impl<I: BidirectionalCursor> Cursor for ReverseCursor<I> {
    #[inline]
    fn increment(&mut self) {
        self.base.decrement();
    }
}

impl<I: ReadCursor + BidirectionalCursor> ReadCursor for ReverseCursor<I> {
    #[inline]
    fn read(&self) -> Self::Reference {
        self.get()
    }
}

impl<I: BidirectionalCursor> BidirectionalCursor for ReverseCursor<I> {
    #[inline]
    fn decrement(&mut self) {
        self.base.increment();
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for ReverseCursor<I> {
    #[inline]
    fn offset(&mut self, n: I::Difference) {
        self.base.offset(-n);
    }

    #[inline]
    fn difference(&self, origin: &Self) -> I::Difference {
        origin.base.difference(&self.base)
    }
}

// ============================================================================
// Arithmetic (random-access bases)
// ============================================================================

/// `r + n` moves `n` positions along the reversed order
impl<I: RandomAccessCursor> Add<I::Difference> for ReverseCursor<I> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: I::Difference) -> Self {
        self.offset(n);
        self
    }
}

impl<I: RandomAccessCursor> AddAssign<I::Difference> for ReverseCursor<I> {
    #[inline]
    fn add_assign(&mut self, n: I::Difference) {
        self.offset(n);
    }
}

impl<I: RandomAccessCursor> SubAssign<I::Difference> for ReverseCursor<I> {
    #[inline]
    fn sub_assign(&mut self, n: I::Difference) {
        self.offset(-n);
    }
}

/// `x - y` is `y.base() - x.base()`
impl<I: RandomAccessCursor<Difference = isize>> Sub<isize> for ReverseCursor<I> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self.offset(-n);
        self
    }
}
impl<I: RandomAccessCursor<Difference = isize>> Add<ReverseCursor<I>> for isize {
    type Output = ReverseCursor<I>;

    #[inline]
    fn add(self, mut r: ReverseCursor<I>) -> ReverseCursor<I> {
        r.offset(self);
        r
    }
}
impl<I: RandomAccessCursor> Sub for ReverseCursor<I> {
    type Output = I::Difference;

    #[inline]
    fn sub(self, origin: Self) -> I::Difference {
        self.difference(&origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::ops::{advance, distance};
    use pretty_assertions::assert_eq;

    #[test]
    fn walks_backwards() {
        let data = ['a', 'b', 'c', 'd'];
        let mut it = rbegin(&data);
        let last = rend(&data);

        let mut seen = Vec::new();
        while it != last {
            seen.push(*it.read());
            it.increment();
        }
        assert_eq!(seen, vec!['d', 'c', 'b', 'a']);
    }

    #[test]
    fn mirrored_movement_and_ordering() {
        let data = [10, 20, 30, 40, 50];
        let first = rbegin(&data);
        let mut it = first;

        it += 2;
        assert_eq!(*it.read(), 30);
        assert_eq!(it.base(), begin(&data) + 3);
        it -= 1;
        assert_eq!(*it.read(), 40);
        it.decrement();
        assert_eq!(it, first);

        assert!(first < first + 1);
        assert_eq!((first + 3) - first, 3);
        assert_eq!(first - (first + 3), -3);
        assert_eq!(distance(rbegin(&data), rend(&data)), 5);
    }

    #[test]
    fn subscript_counts_from_the_designated_element() {
        let data = [1, 2, 3, 4];
        let r = rbegin(&data);
        assert_eq!(*r.at(0), 4);
        assert_eq!(*r.at(3), 1);
    }

    #[test]
    fn stepping_back_from_either_side() {
        let data = [1, 2, 3, 4, 5];
        let r = rbegin(&data) + 3;
        assert_eq!(*r.read(), 2);

        assert_eq!(r - 2, rbegin(&data) + 1);
        assert_eq!(*(r - 2).read(), 4);
        assert_eq!(r.back(3), rbegin(&data));
        assert_eq!(1_isize + r, r + 1);
        assert_eq!(*(1_isize + r).read(), 1);
        assert_eq!((r - 3) - rbegin(&data), 0);
    }

    #[test]
    fn double_reversal_is_the_identity() {
        let data = [5, 6, 7];
        let mut rr = ReverseCursor::new(ReverseCursor::new(begin(&data)));
        assert_eq!(*rr.read(), 5);
        advance(&mut rr, 2);
        assert_eq!(*rr.read(), 7);
        assert_eq!(rr.into_base().into_base(), begin(&data) + 2);
    }
}
