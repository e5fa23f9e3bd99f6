//! Cursor traits
//!
//! A cursor is a position in a sequence. [`IteratorTraits`] is the uniform
//! record of its associated types; the capability traits layer on top:
//!
//! | Trait                    | Adds                                     |
//! |--------------------------|------------------------------------------|
//! | [`Cursor`]               | copy, equality, step forward             |
//! | [`ReadCursor`]           | read the element at the position         |
//! | [`BidirectionalCursor`]  | step back                                |
//! | [`RandomAccessCursor`]   | O(1) jump, signed difference, ordering   |
//! | [`OutputCursor`]         | write-only assignment                    |
//!
//! Raw pointers are random-access cursors. Moving them uses wrapping
//! arithmetic and is safe; they do not implement [`ReadCursor`] because
//! reading through them is not.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::category::CategoryTag;

// ============================================================================
// Associated type record
// ============================================================================

/// Associated types of a cursor
///
/// Output-only cursors use `()` for the types they have no use for.
pub trait IteratorTraits {
    /// Element type
    type Value;
    /// Signed distance between two positions
    type Difference;
    /// Pointer-like handle to the element
    type Pointer;
    /// What reading the cursor yields
    type Reference;
    /// Category tag
    type Category: CategoryTag;
}

/// Signed integer usable as a cursor difference
pub trait DifferenceType:
    Copy
    + Ord
    + Default
    + Debug
    + From<i8>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// The unit step
    #[inline]
    fn one() -> Self {
        Self::from(1)
    }

    /// Whether the value is below zero
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::default()
    }
}

impl<D> DifferenceType for D where
    D: Copy
        + Ord
        + Default
        + Debug
        + From<i8>
        + Add<Output = D>
        + Sub<Output = D>
        + Neg<Output = D>
        + AddAssign
        + SubAssign
        + 'static
{
}

// ============================================================================
// Capabilities
// ============================================================================

/// A position that can be copied, compared, and moved forward
pub trait Cursor: Clone + PartialEq + IteratorTraits<Difference: DifferenceType> {
    /// Moves to the next position
    fn increment(&mut self);
}

/// A cursor whose current element can be read
pub trait ReadCursor: Cursor {
    /// Reads the element at the current position
    ///
    /// # Panics
    /// Implementations may panic when the position is not dereferenceable.
    fn read(&self) -> Self::Reference;
}

/// A cursor that can also move backwards
pub trait BidirectionalCursor: Cursor {
    /// Moves to the previous position
    fn decrement(&mut self);
}

/// A cursor with constant-time jumps and differences
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves by `n` positions (backwards when negative)
    fn offset(&mut self, n: Self::Difference);

    /// Signed number of increments from `origin` to `self`
    fn difference(&self, origin: &Self) -> Self::Difference;
}

/// A write-only position
///
/// `output` and `increment` both hand back the cursor itself; every
/// `assign` is one write. This keeps `*out = v; ++out` style loops uniform
/// across storage writers and container inserters.
pub trait OutputCursor<T> {
    /// The assignable view of the current position
    fn output(&mut self) -> &mut Self;

    /// Writes `value` at the current position
    fn assign(&mut self, value: T);

    /// Moves to the next position
    fn increment(&mut self) -> &mut Self;

    /// Assigns then increments
    #[inline]
    fn put(&mut self, value: T) {
        self.output().assign(value);
        <Self as OutputCursor<T>>::increment(self);
    }
}

// ============================================================================
// Raw pointers
// ============================================================================

#[inline]
fn pointer_difference<T>(to: usize, from: usize) -> isize {
    (to.wrapping_sub(from) as isize) / (size_of::<T>().max(1) as isize)
}

impl<T> IteratorTraits for *const T {
    type Value = T;
    type Difference = isize;
    type Pointer = *const T;
    type Reference = *const T;
    type Category = super::category::RandomAccessTag;
}

impl<T> IteratorTraits for *mut T {
    type Value = T;
    type Difference = isize;
    type Pointer = *mut T;
    type Reference = *mut T;
    type Category = super::category::RandomAccessTag;
}

macro_rules! impl_pointer_cursor {
    ($ptr:ty) => {
        impl<T> Cursor for $ptr {
            #[inline]
            fn increment(&mut self) {
                *self = self.wrapping_add(1);
            }
        }

        impl<T> BidirectionalCursor for $ptr {
            #[inline]
            fn decrement(&mut self) {
                *self = self.wrapping_sub(1);
            }
        }

        impl<T> RandomAccessCursor for $ptr {
            #[inline]
            fn offset(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }

            #[inline]
            fn difference(&self, origin: &Self) -> isize {
                pointer_difference::<T>(self.addr(), origin.addr())
            }
        }
    };
}

impl_pointer_cursor!(*const T);
impl_pointer_cursor!(*mut T);
