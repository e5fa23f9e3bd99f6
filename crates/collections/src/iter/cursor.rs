//! Slice cursors
//!
//! [`SliceCursor`] is the random-access read cursor over a borrowed slice,
//! obtained with [`begin`] / [`end`]. Positions may wander outside the slice
//! while moving; only reading is bounds-checked, and it panics rather than
//! touching memory it should not.
//!
//! [`SliceWriter`] is the matching output cursor over an initialized
//! mutable slice.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use super::category::{OutputTag, RandomAccessTag};
use super::traits::{
    BidirectionalCursor, Cursor, IteratorTraits, OutputCursor, RandomAccessCursor, ReadCursor,
};

// ============================================================================
// SliceCursor
// ============================================================================

/// Random-access read cursor into a borrowed slice
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

/// Cursor at the first element of `slice`
#[inline]
pub fn begin<T>(slice: &[T]) -> SliceCursor<'_, T> {
    SliceCursor { slice, pos: 0 }
}

/// Cursor one past the last element of `slice`
#[inline]
pub fn end<T>(slice: &[T]) -> SliceCursor<'_, T> {
    SliceCursor {
        slice,
        pos: slice.len() as isize,
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at position `pos` of `slice`
    #[inline]
    pub fn at_position(slice: &'a [T], pos: isize) -> Self {
        Self { slice, pos }
    }

    /// Current position, counted from the start of the slice
    #[inline]
    pub fn position(&self) -> isize {
        self.pos
    }

    /// The slice the cursor walks over
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    /// Element at the current position
    ///
    /// # Panics
    /// If the position is outside the slice.
    #[inline]
    pub fn get(&self) -> &'a T {
        match usize::try_from(self.pos).ok().and_then(|i| self.slice.get(i)) {
            Some(value) => value,
            None => panic!(
                "slice cursor read at position {} outside 0..{}",
                self.pos,
                self.slice.len()
            ),
        }
    }

    fn same_slice(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice)
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_slice(other).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("slice", &self.slice.as_ptr())
            .field("len", &self.slice.len())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<'a, T> IteratorTraits for SliceCursor<'a, T> {
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = &'a T;
    type Category = RandomAccessTag;
}

impl<T> Cursor for SliceCursor<'_, T> {
    #[inline]
    fn increment(&mut self) {
        self.pos += 1;
    }
}

impl<T> ReadCursor for SliceCursor<'_, T> {
    #[inline]
    fn read(&self) -> Self::Reference {
        self.get()
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn decrement(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.pos += n;
    }

    #[inline]
    fn difference(&self, origin: &Self) -> isize {
        debug_assert!(self.same_slice(origin), "cursors over different slices");
        self.pos - origin.pos
    }
}

impl<T> Add<isize> for SliceCursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self.pos += n;
        self
    }
}

impl<T> Sub<isize> for SliceCursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self.pos -= n;
        self
    }
}

impl<T> AddAssign<isize> for SliceCursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for SliceCursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> Sub for SliceCursor<'_, T> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.difference(&origin)
    }
}

// ============================================================================
// SliceWriter
// ============================================================================

/// Output cursor assigning into an initialized slice
///
/// # Examples
///
/// ```rust
/// use nebula_collections::iter::{OutputCursor, SliceWriter};
///
/// let mut buf = [0; 3];
/// let mut out = SliceWriter::new(&mut buf);
/// out.put(7);
/// out.put(8);
/// assert_eq!(out.position(), 2);
/// assert_eq!(buf, [7, 8, 0]);
/// ```
#[derive(Debug)]
pub struct SliceWriter<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    /// Writer positioned at the start of `slice`
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Number of positions advanced so far
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Slots not yet written
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slice.len().saturating_sub(self.pos)
    }
}

impl<T> IteratorTraits for SliceWriter<'_, T> {
    type Value = ();
    type Difference = ();
    type Pointer = ();
    type Reference = ();
    type Category = OutputTag;
}

impl<T> OutputCursor<T> for SliceWriter<'_, T> {
    #[inline]
    fn output(&mut self) -> &mut Self {
        self
    }

    /// # Panics
    /// If the writer has run past the end of its slice.
    #[inline]
    fn assign(&mut self, value: T) {
        self.slice[self.pos] = value;
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }
}

impl<T: Clone> OutputCursor<&T> for SliceWriter<'_, T> {
    #[inline]
    fn output(&mut self) -> &mut Self {
        self
    }

    #[inline]
    fn assign(&mut self, value: &T) {
        self.slice[self.pos].clone_from(value);
    }

    #[inline]
    fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }
}
