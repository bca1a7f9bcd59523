//! Owned storage slab behind `DynArray`.
//!
//! `RawBuf` knows nothing about which slots are live; it only owns capacity
//! and relocates a caller-stated prefix when asked to change size. Growing
//! and shrinking are its only two reallocation operations.

use alloc::boxed::Box;
use core::mem::MaybeUninit;
use core::ptr;

/// A fixed-size slab of possibly-uninitialized slots.
///
/// The element count and the initialized prefix are tracked by the owning
/// array, not here. Dropping a `RawBuf` releases the allocation without
/// running any element destructors.
pub(crate) struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast()
    }

    /// Reallocates to a larger capacity, relocating the first `live` slots.
    ///
    /// # Safety
    ///
    /// `live` must not exceed the current capacity, and `new_capacity` must
    /// be larger than the current capacity. Slots beyond `live` are not
    /// carried over.
    pub(crate) unsafe fn grow_to(&mut self, new_capacity: usize, live: usize) {
        debug_assert!(new_capacity > self.capacity());
        debug_assert!(live <= self.capacity());
        // SAFETY: bounds guaranteed by the caller per the contract above.
        unsafe { self.relocate(new_capacity, live) };
    }

    /// Reallocates to a smaller capacity, relocating the first `live` slots.
    ///
    /// # Safety
    ///
    /// `live` must not exceed `new_capacity`, and `new_capacity` must be
    /// smaller than the current capacity.
    pub(crate) unsafe fn shrink_to(&mut self, new_capacity: usize, live: usize) {
        debug_assert!(new_capacity < self.capacity());
        debug_assert!(live <= new_capacity);
        // SAFETY: bounds guaranteed by the caller per the contract above.
        unsafe { self.relocate(new_capacity, live) };
    }

    /// # Safety
    ///
    /// `live <= min(self.capacity(), new_capacity)`.
    unsafe fn relocate(&mut self, new_capacity: usize, live: usize) {
        let mut next = Box::new_uninit_slice(new_capacity);
        // SAFETY: both ranges are in bounds per the caller contract, and the
        // two allocations are distinct. Slots are moved bitwise; the old
        // allocation is released without touching element destructors
        // because MaybeUninit has no drop glue.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), next.as_mut_ptr(), live);
        }
        self.slots = next;
    }
}
