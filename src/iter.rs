//! Iterators over a `DynArray`: borrowed, mutably borrowed, and owning.

use core::ptr;
use core::slice;

use crate::array::DynArray;

/// Iterator over borrowed elements of a `DynArray`.
///
/// This iterator implements `Clone` whether or not `T` does.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [T]) -> Self {
        Self { inner: live.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Iterator over mutably borrowed elements of a `DynArray`.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(live: &'a mut [T]) -> Self {
        Self {
            inner: live.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator that consumes a `DynArray`, yielding elements by value in
/// order.
pub struct IntoIter<T> {
    array: DynArray<T>,
    index: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.array.len() {
            return None;
        }
        let index = self.index;
        self.index += 1;
        // SAFETY: `index` is within the live prefix and is visited exactly
        // once; the drop impl below treats consumed slots as already gone.
        Some(unsafe { self.array.slots().add(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let len = self.array.len();
        let consumed = self.index;
        // SAFETY: slots before `consumed` were moved out by `next`; the rest
        // are still live and dropped here exactly once. The length is zeroed
        // first so the array's own drop touches neither group, and a
        // panicking element Drop leaks the remainder instead of
        // double-dropping.
        unsafe {
            self.array.set_len(0);
            let base = self.array.slots_mut();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(consumed),
                len - consumed,
            ));
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            array: self,
            index: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
