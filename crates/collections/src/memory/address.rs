//! Address resolution for construction targets
//!
//! Every construction algorithm writes through a `NonNull<T>` obtained here.
//! A reference always carries the object's real address, so these are plain
//! conversions; they never allocate and never panic.

use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// Address of a live object behind a shared reference.
#[inline]
pub fn address_of<T: ?Sized>(value: &T) -> NonNull<T> {
    NonNull::from(value)
}

/// Address of a live object behind an exclusive reference.
#[inline]
pub fn address_of_mut<T: ?Sized>(value: &mut T) -> NonNull<T> {
    NonNull::from(value)
}

/// Address of an uninitialized slot, typed as the value it will hold.
#[inline]
pub fn slot_address<T>(slot: &mut MaybeUninit<T>) -> NonNull<T> {
    NonNull::from(slot).cast()
}

/// Address of the first slot of an uninitialized run.
///
/// For an empty run this is a well-aligned dangling pointer that must not be
/// written through.
#[inline]
pub fn slots_address<T>(slots: &mut [MaybeUninit<T>]) -> NonNull<T> {
    NonNull::from(slots).cast()
}
