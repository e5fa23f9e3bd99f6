//! Construction algorithms over uninitialized storage
//!
//! Batch construct/destroy operations parameterized over an
//! [`ObjectAllocator`]. Every constructing operation gives the strong
//! guarantee: when the k-th construction fails, by error or by panic, the
//! k objects built before it are destroyed in order and the failure reaches
//! the caller unchanged. Nothing past slot k-1 is ever constructed.
//!
//! # Safety
//!
//! The pointer-based functions are `unsafe`: the caller vouches that the
//! destination run is writable, aligned, large enough, and uninitialized
//! (for construction) or live (for destruction). The slice-based entry
//! points derive all of that from `&mut [MaybeUninit<T>]` and are safe.

use core::borrow::Borrow;
use core::mem::MaybeUninit;
use core::ptr::NonNull;
use core::slice;

use super::address::slots_address;
use super::allocator::ObjectAllocator;
use super::guard::ConstructGuard;
use crate::error::ConstructError;
use crate::iter::{ReadCursor, begin, end};

// ============================================================================
// Destruction
// ============================================================================

/// Destroys exactly one object.
///
/// # Safety
/// `slot` must hold a live object that is not used afterwards.
#[inline]
pub unsafe fn destroy_one<T, A: ObjectAllocator<T>>(alloc: &mut A, slot: NonNull<T>) {
    // SAFETY: slot holds a live object (caller contract)
    unsafe { alloc.destroy(slot) };
}

/// Destroys every object in `[first, last)`, front to back.
///
/// # Safety
/// - `last` must be reachable from `first` by stepping one slot at a time
/// - Every slot in the range must hold a live object not used afterwards
pub unsafe fn destroy_range<T, A: ObjectAllocator<T>>(
    alloc: &mut A,
    first: NonNull<T>,
    last: NonNull<T>,
) {
    let mut cursor = first;
    while cursor != last {
        // SAFETY: cursor lies in [first, last), all live (caller contract)
        unsafe {
            alloc.destroy(cursor);
            cursor = cursor.add(1);
        }
    }
}

/// Destroys exactly `count` objects starting at `first`, front to back.
///
/// # Safety
/// The `count` slots starting at `first` must hold live objects not used
/// afterwards.
pub unsafe fn destroy_n<T, A: ObjectAllocator<T>>(alloc: &mut A, first: NonNull<T>, count: usize) {
    for index in 0..count {
        // SAFETY: index < count, all live (caller contract)
        unsafe { alloc.destroy(first.add(index)) };
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Copy-constructs `[first, last)` into consecutive slots starting at `dest`.
///
/// Returns the slot one past the last constructed object.
///
/// # Safety
/// - `last` must be reachable from `first`
/// - `dest` must start a writable, uninitialized run of at least
///   `distance(first, last)` slots
///
/// # Errors
/// The allocator's error for the first failing element, after the
/// constructed prefix has been destroyed.
pub unsafe fn uninitialized_copy<I, T, A>(
    alloc: &mut A,
    first: I,
    last: I,
    dest: NonNull<T>,
) -> Result<NonNull<T>, A::Error>
where
    I: ReadCursor,
    I::Reference: Borrow<T>,
    A: ObjectAllocator<T>,
{
    // SAFETY: dest starts a writable run covering the source (caller contract)
    let mut guard = unsafe { ConstructGuard::new(alloc, dest) };
    let mut first = first;
    while first != last {
        let source = first.read();
        // SAFETY: the run still has room for this element (caller contract)
        unsafe { guard.construct_next(<I::Reference as Borrow<T>>::borrow(&source))? };
        first.increment();
    }
    Ok(guard.finish())
}

/// Copy-constructs `count` elements read from `first` into slots at `dest`.
///
/// # Safety
/// - `first` must be readable for `count` consecutive positions
/// - `dest` must start a writable, uninitialized run of `count` slots
///
/// # Errors
/// As [`uninitialized_copy`].
pub unsafe fn uninitialized_copy_n<I, T, A>(
    alloc: &mut A,
    first: I,
    count: usize,
    dest: NonNull<T>,
) -> Result<NonNull<T>, A::Error>
where
    I: ReadCursor,
    I::Reference: Borrow<T>,
    A: ObjectAllocator<T>,
{
    // SAFETY: dest starts a writable run of `count` slots (caller contract)
    let mut guard = unsafe { ConstructGuard::new(alloc, dest) };
    let mut first = first;
    for _ in 0..count {
        let source = first.read();
        // SAFETY: fewer than `count` slots have been used so far
        unsafe { guard.construct_next(<I::Reference as Borrow<T>>::borrow(&source))? };
        first.increment();
    }
    Ok(guard.finish())
}

/// Copy-constructs `value` into every slot of `[first, last)`.
///
/// # Safety
/// - `last` must be reachable from `first`
/// - Every slot in the range must be writable and uninitialized
///
/// # Errors
/// As [`uninitialized_copy`].
pub unsafe fn uninitialized_fill<T, A>(
    alloc: &mut A,
    first: NonNull<T>,
    last: NonNull<T>,
    value: &T,
) -> Result<(), A::Error>
where
    A: ObjectAllocator<T>,
{
    // SAFETY: [first, last) is writable and uninitialized (caller contract)
    let mut guard = unsafe { ConstructGuard::new(alloc, first) };
    while guard.cursor() != last {
        // SAFETY: cursor is still inside [first, last)
        unsafe { guard.construct_next(value)? };
    }
    guard.finish();
    Ok(())
}

/// Copy-constructs `value` into `count` slots starting at `first`.
///
/// Returns the slot one past the last constructed object.
///
/// # Safety
/// `first` must start a writable, uninitialized run of `count` slots.
///
/// # Errors
/// As [`uninitialized_copy`].
pub unsafe fn uninitialized_fill_n<T, A>(
    alloc: &mut A,
    first: NonNull<T>,
    count: usize,
    value: &T,
) -> Result<NonNull<T>, A::Error>
where
    A: ObjectAllocator<T>,
{
    // SAFETY: first starts a writable run of `count` slots (caller contract)
    let mut guard = unsafe { ConstructGuard::new(alloc, first) };
    for _ in 0..count {
        // SAFETY: fewer than `count` slots have been used so far
        unsafe { guard.construct_next(value)? };
    }
    Ok(guard.finish())
}

// ============================================================================
// Slice entry points
// ============================================================================

/// Copy-constructs `src` into the front of `dest`.
///
/// On success the first `src.len()` slots of `dest` are initialized and
/// returned as a slice; the remaining slots stay uninitialized. The caller
/// owns the returned objects and must destroy them (or leak them).
///
/// # Errors
/// - [`ConstructError::InsufficientCapacity`] (converted into `A::Error`)
///   when `dest` is shorter than `src`; nothing is constructed
/// - the allocator's error, after rollback
pub fn uninitialized_copy_slice<'d, T, A>(
    alloc: &mut A,
    src: &[T],
    dest: &'d mut [MaybeUninit<T>],
) -> Result<&'d mut [T], A::Error>
where
    A: ObjectAllocator<T>,
{
    if dest.len() < src.len() {
        return Err(ConstructError::insufficient_capacity(src.len(), dest.len()).into());
    }

    let first = slots_address(dest);
    // SAFETY: dest provides src.len() writable, uninitialized slots, checked above
    unsafe {
        uninitialized_copy(alloc, begin(src), end(src), first)?;
        Ok(slice::from_raw_parts_mut(first.as_ptr(), src.len()))
    }
}

/// Copy-constructs `value` into every slot of `dest`.
///
/// # Errors
/// The allocator's error, after rollback.
pub fn uninitialized_fill_slice<'d, T, A>(
    alloc: &mut A,
    dest: &'d mut [MaybeUninit<T>],
    value: &T,
) -> Result<&'d mut [T], A::Error>
where
    A: ObjectAllocator<T>,
{
    let len = dest.len();
    let first = slots_address(dest);
    // SAFETY: dest provides `len` writable, uninitialized slots
    unsafe {
        uninitialized_fill_n(alloc, first, len, value)?;
        Ok(slice::from_raw_parts_mut(first.as_ptr(), len))
    }
}

// ============================================================================
// Tests
// ============================================================================
