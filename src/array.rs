//! The array type: length/capacity bookkeeping, positional shifting, and the
//! growth/shrink policy. Reallocation happens only through the buffer's two
//! resize primitives.

use core::cmp;
use core::fmt;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::buffer::RawBuf;
use crate::cursor::{Cursor, CursorMut};
use crate::error::DynArrayError;
use crate::iter::{Iter, IterMut};

/// Capacity every array starts from and never shrinks below.
const DEFAULT_CAPACITY: usize = 8;

/// A growable contiguous sequence with doubling growth and quarter-full
/// shrink.
///
/// Slots `0..len()` hold live elements in insertion order; slots beyond that
/// are uninitialized. The capacity is never smaller than `max(8, len())`,
/// including right after construction, cloning, and every shrink.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with the default capacity of 8.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: RawBuf::with_capacity(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty array with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(cmp::max(capacity, DEFAULT_CAPACITY)),
            len: 0,
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots 0..len are initialized per the struct invariant.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots 0..len are initialized per the struct invariant.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, len })
    }

    /// Appends `value` as the new last element.
    ///
    /// Doubles the capacity first when the array is full, so a long run of
    /// appends costs O(1) amortized per element.
    pub fn append(&mut self, value: T) {
        let at = self.len;
        self.place(at, value);
    }

    /// Inserts `value` as the new first element, shifting every existing
    /// element one slot toward higher indices.
    pub fn prepend(&mut self, value: T) {
        self.place(0, value);
    }

    /// Inserts `value` immediately before position `at`, shifting elements at
    /// `at` and above one slot toward higher indices.
    ///
    /// `at` is typically a cursor's position; `at == len()` (the past-the-end
    /// position) appends, with nothing to shift.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` when `at > len()`.
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), DynArrayError> {
        if at > self.len {
            return Err(DynArrayError::CursorOutOfRange {
                position: at,
                len: self.len,
            });
        }
        self.place(at, value);
        Ok(())
    }

    /// Removes and returns the first element, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::Empty` when the array holds no elements.
    pub fn pop_first(&mut self) -> Result<T, DynArrayError> {
        if self.is_empty() {
            return Err(DynArrayError::Empty);
        }
        Ok(self.take_out(0))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::Empty` when the array holds no elements.
    pub fn pop_last(&mut self) -> Result<T, DynArrayError> {
        if self.is_empty() {
            return Err(DynArrayError::Empty);
        }
        Ok(self.take_out(self.len - 1))
    }

    /// Removes and returns the element at `at`, shifting the tail left by
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` when `at >= len()`; an empty
    /// array rejects every position this way.
    pub fn erase(&mut self, at: usize) -> Result<T, DynArrayError> {
        if at >= self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index: at,
                len: self.len,
            });
        }
        Ok(self.take_out(at))
    }

    /// Removes the half-open range `[first, last)`, closing the gap in one
    /// shift pass. Equal bounds are a no-op. Removed elements are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidRange` unless `first <= last <= len()`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<(), DynArrayError> {
        if first > last || last > self.len {
            return Err(DynArrayError::InvalidRange {
                first,
                last,
                len: self.len,
            });
        }
        if first == last {
            return Ok(());
        }

        let old_len = self.len;
        let count = last - first;
        self.len = first;
        // SAFETY: `first..last` lies inside the previously live prefix. The
        // length is cut to `first` before destructors run, so a panicking
        // element Drop leaks the not-yet-handled suffix instead of
        // double-dropping it; on the normal path the tail slides down and the
        // length is restored to cover it.
        unsafe {
            let base = self.buf.as_mut_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(first), count));
            ptr::copy(base.add(last), base.add(first), old_len - last);
        }
        self.len = old_len - count;
        self.maybe_shrink();
        Ok(())
    }

    /// Drops every element, leaving the array empty.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: slots 0..len were initialized, and the length is already
        // zeroed, so a panicking element Drop cannot cause a double drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), len));
        }
        self.maybe_shrink();
    }

    /// Read-only cursor at position 0.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Read-only cursor at the past-the-end position.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len)
    }

    /// Mutable cursor at position 0.
    #[must_use]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Mutable cursor at the past-the-end position.
    #[must_use]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let end = self.len;
        CursorMut::new(self, end)
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    pub(crate) fn slots(&self) -> *const T {
        self.buf.as_ptr()
    }

    pub(crate) fn slots_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Sets the live length directly, for the owning iterator's bookkeeping.
    ///
    /// # Safety
    ///
    /// `len` must not exceed capacity, and slots `0..len` must be
    /// initialized.
    pub(crate) unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    /// Insertion core shared by `append`, `prepend`, `insert`, and the
    /// mutable cursor. Callers guarantee `at <= len`.
    pub(crate) fn place(&mut self, at: usize, value: T) {
        debug_assert!(at <= self.len);
        self.grow_if_full();
        // SAFETY: after growing, `len < capacity`, so the tail shift and the
        // write at `at` stay within the allocation.
        unsafe {
            self.shift_tail_right(at);
            self.buf.as_mut_ptr().add(at).write(value);
        }
        self.len += 1;
    }

    /// Removal core shared by `pop_first`, `pop_last`, and `erase`.
    fn take_out(&mut self, at: usize) -> T {
        debug_assert!(at < self.len);
        // SAFETY: slot `at` is initialized; the shift closes the gap before
        // the length drops, so the value read out has a single owner.
        let value = unsafe {
            let value = self.buf.as_ptr().add(at).read();
            self.shift_tail_left(at + 1, 1);
            value
        };
        self.len -= 1;
        self.maybe_shrink();
        value
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            let target = self.capacity() * 2;
            debug!("grow {} -> {} at len {}", self.capacity(), target, self.len);
            // SAFETY: `target` exceeds the current capacity and exactly `len`
            // slots are live.
            unsafe { self.buf.grow_to(target, self.len) };
        }
    }

    /// Applied after every removal: halve the capacity when the array is less
    /// than a quarter full, never below the default.
    fn maybe_shrink(&mut self) {
        if self.capacity() > DEFAULT_CAPACITY && self.len < self.capacity() / 4 {
            let target = cmp::max(self.capacity() / 2, DEFAULT_CAPACITY);
            debug!("shrink {} -> {} at len {}", self.capacity(), target, self.len);
            // SAFETY: `len < capacity / 4 <= target < capacity`, so the live
            // prefix fits and the capacity strictly decreases.
            unsafe { self.buf.shrink_to(target, self.len) };
        }
    }

    /// Moves `slots[from..len]` one slot toward higher indices.
    ///
    /// # Safety
    ///
    /// `from <= len`, and the slot at `len` must be within capacity.
    unsafe fn shift_tail_right(&mut self, from: usize) {
        debug_assert!(from <= self.len);
        debug_assert!(self.len < self.capacity());
        let base = self.buf.as_mut_ptr();
        // SAFETY: both ranges are within capacity per the contract; `copy`
        // handles the overlap.
        unsafe { ptr::copy(base.add(from), base.add(from + 1), self.len - from) };
    }

    /// Moves `slots[from..len]` `by` slots toward lower indices.
    ///
    /// # Safety
    ///
    /// `by <= from <= len`.
    unsafe fn shift_tail_left(&mut self, from: usize, by: usize) {
        debug_assert!(by <= from);
        debug_assert!(from <= self.len);
        let base = self.buf.as_mut_ptr();
        // SAFETY: per the contract both ranges lie within the live prefix;
        // `copy` handles the overlap.
        unsafe { ptr::copy(base.add(from), base.add(from - by), self.len - from) };
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the live prefix is initialized; the buffer itself
        // is released by `RawBuf` afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len));
        }
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        for value in self.iter() {
            copy.append(value.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Subscript access; panics with the `IndexOutOfBounds` diagnostic where
    /// `get` would return an error.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            array.append(value);
        }
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}
