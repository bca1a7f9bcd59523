//! Cursors: position-plus-owner handles used for traversal and as anchors
//! for positional insert/remove.
//!
//! Both flavors keep a logical position in `0..=len` (`len` being the
//! past-the-end sentinel) and validate it against the owner's current length
//! on every access. Nothing is cached at creation, so a cursor that has
//! watched its array shrink under it reports an error instead of reading a
//! stale slot.

use core::fmt;
use core::ptr;

use crate::array::DynArray;
use crate::error::DynArrayError;

// Navigation core shared by both cursor flavors. Errors carry the cursor
// state at the point of failure.

fn checked_deref(position: usize, len: usize) -> Result<(), DynArrayError> {
    if position >= len {
        return Err(DynArrayError::CursorOutOfRange { position, len });
    }
    Ok(())
}

fn step_forward(position: usize, len: usize) -> Result<usize, DynArrayError> {
    if position >= len {
        return Err(DynArrayError::CursorOutOfRange { position, len });
    }
    Ok(position + 1)
}

fn step_back(position: usize, len: usize) -> Result<usize, DynArrayError> {
    if position == 0 {
        return Err(DynArrayError::CursorOutOfRange { position, len });
    }
    Ok(position - 1)
}

fn jump_forward(position: usize, by: usize, len: usize) -> Result<usize, DynArrayError> {
    match position.checked_add(by) {
        Some(target) if target <= len => Ok(target),
        _ => Err(DynArrayError::CursorOutOfRange { position, len }),
    }
}

fn jump_back(position: usize, by: usize, len: usize) -> Result<usize, DynArrayError> {
    if by > position {
        return Err(DynArrayError::CursorOutOfRange { position, len });
    }
    Ok(position - by)
}

/// Read-only cursor: a logical position plus a shared borrow of the owning
/// array.
pub struct Cursor<'a, T> {
    array: &'a DynArray<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynArray<T>, position: usize) -> Self {
        debug_assert!(position <= array.len());
        Self { array, position }
    }

    /// Current logical position, `0..=len`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.array.len()
    }

    /// Dereferences the cursor. The borrow is tied to the array, not to the
    /// cursor, so it stays usable after the cursor moves on.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at the past-the-end
    /// position.
    pub fn get(&self) -> Result<&'a T, DynArrayError> {
        checked_deref(self.position, self.array.len())?;
        Ok(&self.array.as_slice()[self.position])
    }

    /// Advances by one position. Stepping from past-the-end is an error, not
    /// a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at the past-the-end
    /// position.
    pub fn advance(&mut self) -> Result<(), DynArrayError> {
        self.position = step_forward(self.position, self.array.len())?;
        Ok(())
    }

    /// Retreats by one position.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at position 0.
    pub fn retreat(&mut self) -> Result<(), DynArrayError> {
        self.position = step_back(self.position, self.array.len())?;
        Ok(())
    }

    /// Returns a new cursor `by` positions closer to the end.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` when the target would pass
    /// the past-the-end position.
    pub fn forward(&self, by: usize) -> Result<Self, DynArrayError> {
        let position = jump_forward(self.position, by, self.array.len())?;
        Ok(Self {
            array: self.array,
            position,
        })
    }

    /// Returns a new cursor `by` positions closer to the start.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` when the target would pass
    /// position 0.
    pub fn back(&self, by: usize) -> Result<Self, DynArrayError> {
        let position = jump_back(self.position, by, self.array.len())?;
        Ok(Self {
            array: self.array,
            position,
        })
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Cursors are equal when they denote the same logical position on the
    /// same array.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.array.len())
            .finish()
    }
}

/// Mutable cursor: the same navigation contract as [`Cursor`] plus
/// write-through dereference and editing at the cursor.
///
/// Holds the exclusive borrow of the array, so while it is alive it is the
/// only access path; offsets therefore seek in place instead of returning a
/// second cursor.
pub struct CursorMut<'a, T> {
    array: &'a mut DynArray<T>,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(array: &'a mut DynArray<T>, position: usize) -> Self {
        debug_assert!(position <= array.len());
        Self { array, position }
    }

    /// Current logical position, `0..=len`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.array.len()
    }

    /// Dereferences the cursor.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at the past-the-end
    /// position.
    pub fn get(&self) -> Result<&T, DynArrayError> {
        checked_deref(self.position, self.array.len())?;
        Ok(&self.array.as_slice()[self.position])
    }

    /// Write-through dereference.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at the past-the-end
    /// position.
    pub fn get_mut(&mut self) -> Result<&mut T, DynArrayError> {
        checked_deref(self.position, self.array.len())?;
        Ok(&mut self.array.as_mut_slice()[self.position])
    }

    /// Advances by one position.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at the past-the-end
    /// position.
    pub fn advance(&mut self) -> Result<(), DynArrayError> {
        self.position = step_forward(self.position, self.array.len())?;
        Ok(())
    }

    /// Retreats by one position.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` at position 0.
    pub fn retreat(&mut self) -> Result<(), DynArrayError> {
        self.position = step_back(self.position, self.array.len())?;
        Ok(())
    }

    /// Moves `by` positions toward the end, in place.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` when the target would pass
    /// the past-the-end position.
    pub fn seek_forward(&mut self, by: usize) -> Result<(), DynArrayError> {
        self.position = jump_forward(self.position, by, self.array.len())?;
        Ok(())
    }

    /// Moves `by` positions toward the start, in place.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CursorOutOfRange` when the target would pass
    /// position 0.
    pub fn seek_back(&mut self, by: usize) -> Result<(), DynArrayError> {
        self.position = jump_back(self.position, by, self.array.len())?;
        Ok(())
    }

    /// Inserts `value` immediately before the cursor; the cursor then
    /// denotes the inserted element.
    ///
    /// A cursor position is always a valid insertion anchor (past-the-end
    /// appends), so this cannot fail.
    pub fn insert_before(&mut self, value: T) {
        let at = self.position;
        self.array.place(at, value);
    }

    /// Removes and returns the element at the cursor; the cursor then
    /// denotes the removed element's successor.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` at the past-the-end
    /// position, and therefore for any position on an empty array.
    pub fn remove(&mut self) -> Result<T, DynArrayError> {
        let at = self.position;
        self.array.erase(at)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.array.len())
            .finish()
    }
}
