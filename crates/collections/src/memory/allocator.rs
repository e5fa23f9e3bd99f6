//! Object allocator capability
//!
//! Containers hand an [`ObjectAllocator`] to the construction algorithms.
//! The capability only constructs into and destroys out of storage the
//! caller already owns; obtaining and releasing that storage is a separate
//! concern (see [`RawStorage`](super::RawStorage)).
//!
//! # Safety
//!
//! The rollback guarantees of the algorithms in [`uninit`](super::uninit)
//! rest on two promises every implementor makes:
//! - `construct` either leaves a live `T` in the slot and returns `Ok`, or
//!   returns `Err` / unwinds with the slot untouched
//! - `destroy` drops exactly the object in the slot and does not panic

use core::ptr::{self, NonNull};

use crate::error::ConstructError;

/// Construct/destroy capability over caller-owned slots of `T`
///
/// # Safety
///
/// Implementors must guarantee that:
/// - A successful `construct` leaves a fully initialized `T` at `slot`
/// - A failed `construct` (error or panic) leaves `slot` uninitialized and
///   no `T` was created that would need dropping
/// - `destroy` runs the destructor of the object at `slot` exactly once
///   and does not unwind
pub unsafe trait ObjectAllocator<T> {
    /// Failure reported by `construct`, propagated unchanged by the algorithms
    type Error: From<ConstructError>;

    /// Copy-constructs `value` into `slot`
    ///
    /// # Safety
    /// - `slot` must be valid for writes and aligned for `T`
    /// - `slot` must not hold a live object (it would be overwritten)
    unsafe fn construct(&mut self, slot: NonNull<T>, value: &T) -> Result<(), Self::Error>;

    /// Destroys the object at `slot` without releasing its storage
    ///
    /// # Safety
    /// - `slot` must hold a live object previously constructed into it
    /// - The object must not be used or destroyed again afterwards
    unsafe fn destroy(&mut self, slot: NonNull<T>);
}

// SAFETY: Forwards to the referenced allocator, preserving its contract.
unsafe impl<T, A: ObjectAllocator<T> + ?Sized> ObjectAllocator<T> for &mut A {
    type Error = A::Error;

    #[inline]
    unsafe fn construct(&mut self, slot: NonNull<T>, value: &T) -> Result<(), Self::Error> {
        // SAFETY: caller upholds the slot contract of `construct`
        unsafe { (**self).construct(slot, value) }
    }

    #[inline]
    unsafe fn destroy(&mut self, slot: NonNull<T>) {
        // SAFETY: caller upholds the slot contract of `destroy`
        unsafe { (**self).destroy(slot) }
    }
}

/// Allocator constructing through `Clone` and destroying through `Drop`
///
/// A panicking `clone` unwinds before anything is written, which satisfies
/// the construct contract; the algorithms roll back the finished prefix.
///
/// # Examples
///
/// ```rust
/// use core::mem::MaybeUninit;
/// use nebula_collections::memory::{DefaultAllocator, uninitialized_copy_slice};
///
/// let source = [String::from("a"), String::from("b")];
/// let mut slots = [const { MaybeUninit::<String>::uninit() }; 2];
///
/// let mut alloc = DefaultAllocator;
/// let built = uninitialized_copy_slice(&mut alloc, &source, &mut slots)?;
/// assert_eq!(built, &source[..]);
/// # unsafe { core::ptr::drop_in_place(built) };
/// # Ok::<(), nebula_collections::ConstructError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultAllocator;

impl DefaultAllocator {
    /// Creates the stateless default allocator
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

// SAFETY: `clone` runs before the write, so a panic leaves the slot
// untouched; `drop_in_place` runs the destructor exactly once.
unsafe impl<T: Clone> ObjectAllocator<T> for DefaultAllocator {
    type Error = ConstructError;

    #[inline]
    unsafe fn construct(&mut self, slot: NonNull<T>, value: &T) -> Result<(), Self::Error> {
        let copy = value.clone();
        // SAFETY: slot is valid for writes and holds no live object (caller contract)
        unsafe { slot.as_ptr().write(copy) };
        Ok(())
    }

    #[inline]
    unsafe fn destroy(&mut self, slot: NonNull<T>) {
        // SAFETY: slot holds a live object constructed earlier (caller contract)
        unsafe { ptr::drop_in_place(slot.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::MaybeUninit;
    use std::rc::Rc;

    #[test]
    fn construct_then_destroy() {
        let shared = Rc::new(5);
        let mut slot = MaybeUninit::<Rc<i32>>::uninit();
        let mut alloc = DefaultAllocator::new();

        unsafe {
            let ptr = NonNull::new_unchecked(slot.as_mut_ptr());
            alloc.construct(ptr, &shared).unwrap();
            assert_eq!(Rc::strong_count(&shared), 2);
            assert_eq!(**ptr.as_ptr(), 5);

            alloc.destroy(ptr);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn forwarding_through_reference() {
        fn build<A>(mut alloc: A, slot: NonNull<String>)
        where
            A: ObjectAllocator<String, Error: core::fmt::Debug>,
        {
            unsafe { alloc.construct(slot, &String::from("forwarded")).unwrap() };
        }

        let mut slot = MaybeUninit::<String>::uninit();
        let mut alloc = DefaultAllocator;
        let ptr = NonNull::new(slot.as_mut_ptr()).unwrap();
        build(&mut alloc, ptr);

        unsafe {
            assert_eq!(&*ptr.as_ptr(), "forwarded");
            alloc.destroy(ptr);
        }
    }
}
