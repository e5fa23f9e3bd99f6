//! Rollback guard for batch construction
//!
//! A [`ConstructGuard`] owns the prefix of a destination run that has been
//! constructed so far. Every exit path that does not reach
//! [`ConstructGuard::finish`] (an early `?` return or an unwinding panic)
//! drops the guard, which destroys that prefix front to back.

use core::fmt;
use core::ptr::NonNull;

use super::allocator::ObjectAllocator;

#[cfg(feature = "logging")]
use tracing::trace;

/// RAII guard over a partially constructed run of `T`
///
/// # Examples
///
/// ```rust
/// use core::mem::MaybeUninit;
/// use nebula_collections::memory::{ConstructGuard, DefaultAllocator, slots_address};
///
/// let mut slots = [const { MaybeUninit::<String>::uninit() }; 3];
/// let mut alloc = DefaultAllocator;
///
/// // SAFETY: three writable, uninitialized slots
/// let mut guard = unsafe { ConstructGuard::new(&mut alloc, slots_address(&mut slots)) };
/// for word in ["a", "b", "c"] {
///     unsafe { guard.construct_next(&word.to_string())? };
/// }
/// let _end = guard.finish();
///
/// let first = slots_address(&mut slots);
/// unsafe { nebula_collections::memory::destroy_n(&mut alloc, first, 3) };
/// # Ok::<(), nebula_collections::ConstructError>(())
/// ```
pub struct ConstructGuard<'a, T, A: ObjectAllocator<T>> {
    alloc: &'a mut A,
    first: NonNull<T>,
    constructed: usize,
    armed: bool,
}

impl<'a, T, A: ObjectAllocator<T>> ConstructGuard<'a, T, A> {
    /// Arms a guard over the run starting at `first`
    ///
    /// # Safety
    /// - Every slot the guard will construct into must be valid for writes,
    ///   aligned, and hold no live object
    /// - Nothing else may destroy or move the constructed prefix while the
    ///   guard is armed
    #[inline]
    pub unsafe fn new(alloc: &'a mut A, first: NonNull<T>) -> Self {
        Self {
            alloc,
            first,
            constructed: 0,
            armed: true,
        }
    }

    /// Number of objects constructed so far
    #[inline]
    pub fn constructed(&self) -> usize {
        self.constructed
    }

    /// Slot the next construction will target
    #[inline]
    pub fn cursor(&self) -> NonNull<T> {
        // SAFETY: the run covers at least `constructed` slots past `first`
        // (constructor contract), so the one-past pointer stays in bounds.
        unsafe { self.first.add(self.constructed) }
    }

    /// Constructs `value` into the next slot and extends the guarded prefix
    ///
    /// On error the prefix is left as it was; the caller normally returns
    /// the error, dropping the guard and rolling the prefix back.
    ///
    /// # Safety
    /// The next slot must be inside the run promised to [`ConstructGuard::new`].
    #[inline]
    pub unsafe fn construct_next(&mut self, value: &T) -> Result<(), A::Error> {
        let slot = self.cursor();
        // SAFETY: slot is writable and uninitialized (caller + constructor contract)
        unsafe { self.alloc.construct(slot, value)? };
        self.constructed += 1;
        Ok(())
    }

    /// Disarms the guard and returns the one-past-last constructed slot
    ///
    /// Ownership of the constructed objects passes back to the caller.
    #[inline]
    pub fn finish(mut self) -> NonNull<T> {
        self.armed = false;
        self.cursor()
    }
}

impl<T, A: ObjectAllocator<T>> Drop for ConstructGuard<'_, T, A> {
    fn drop(&mut self) {
        if !self.armed || self.constructed == 0 {
            return;
        }

        #[cfg(feature = "logging")]
        trace!(
            constructed = self.constructed,
            element = core::any::type_name::<T>(),
            "rolling back partially constructed run"
        );

        for index in 0..self.constructed {
            // SAFETY: slots [0, constructed) hold live objects built through
            // this guard and nobody else owns them while it is armed.
            unsafe { self.alloc.destroy(self.first.add(index)) };
        }
        self.constructed = 0;
    }
}

impl<T, A: ObjectAllocator<T>> fmt::Debug for ConstructGuard<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructGuard")
            .field("first", &self.first)
            .field("constructed", &self.constructed)
            .field("armed", &self.armed)
            .finish()
    }
}
