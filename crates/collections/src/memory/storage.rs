//! Raw slot storage
//!
//! [`RawStorage`] owns an uninitialized, fixed-capacity buffer of `T` slots
//! taken from the global allocator. It only manages memory: objects are
//! built into it with the construction algorithms and must be destroyed by
//! the owner before the storage is dropped (or deliberately leaked).
//!
//! # Safety
//!
//! - The buffer is allocated with `Layout::array::<T>(capacity)` and freed
//!   with the same layout
//! - Zero-sized layouts never touch the allocator; the pointer is dangling
//!   but aligned
//! - Dropping the storage never runs element destructors

use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;
use std::alloc;

use crate::error::{ConstructError, ConstructResult};

#[cfg(feature = "logging")]
use tracing::trace;

/// Owned buffer of uninitialized `T` slots
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawStorage is a uniquely owned buffer; any `T` placed in it is
// reached only through `&self`/`&mut self`, like a `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}

// SAFETY: shared access only hands out raw pointers; see Send above.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// Allocates room for exactly `capacity` objects
    ///
    /// # Errors
    /// - [`ConstructError::CapacityOverflow`] if the byte size overflows `isize`
    /// - [`ConstructError::AllocationFailed`] if the global allocator fails
    pub fn with_capacity(capacity: usize) -> ConstructResult<Self> {
        let layout = Self::layout(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has non-zero size
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())
            .ok_or_else(|| ConstructError::allocation_failed(layout.size(), layout.align()))?;

        #[cfg(feature = "logging")]
        trace!(
            capacity,
            bytes = layout.size(),
            element = core::any::type_name::<T>(),
            "raw storage allocated"
        );

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    fn layout(capacity: usize) -> ConstructResult<Layout> {
        Layout::array::<T>(capacity)
            .map_err(|_| ConstructError::capacity_overflow(capacity, size_of::<T>()))
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the storage has no slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Pointer to the first slot
    #[inline]
    pub fn as_ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Pointer to slot `index`, or `None` past the end
    ///
    /// `index == capacity` is also rejected; use [`end_ptr`](Self::end_ptr)
    /// for the one-past-last position.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<NonNull<T>> {
        // SAFETY: index < capacity keeps the offset inside the allocation
        (index < self.capacity).then(|| unsafe { self.ptr.add(index) })
    }

    /// One-past-last slot pointer
    #[inline]
    pub fn end_ptr(&self) -> NonNull<T> {
        // SAFETY: one past the end of the allocation is a valid offset
        unsafe { self.ptr.add(self.capacity) }
    }

    /// Views the slots as uninitialized memory
    #[inline]
    pub fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: the buffer holds `capacity` slots and MaybeUninit<T> has
        // the layout of T; no initialization is claimed
        unsafe {
            core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<MaybeUninit<T>>(), self.capacity)
        }
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        let Ok(layout) = Self::layout(self.capacity) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }

        #[cfg(feature = "logging")]
        trace!(
            capacity = self.capacity,
            bytes = layout.size(),
            "raw storage released"
        );

        // SAFETY: ptr was returned by `alloc::alloc` with this exact layout
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
