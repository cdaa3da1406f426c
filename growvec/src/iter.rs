use core::iter::FusedIterator;
use core::mem::{self, ManuallyDrop};
use core::{fmt, ptr};

use crate::core::GrowVec;
use crate::cursor::Cursor;
use crate::raw::RawBuffer;

/// Iterator over shared references to the elements of a `GrowVec`
///
/// This iterator implements `Clone`.
pub struct Iter<'a, T> {
    items: &'a [T],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Iterates over the cursor range `[begin, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the cursors belong to different vectors or `end` precedes `begin`.
    #[must_use]
    pub fn from_cursors(begin: Cursor<'a, T>, end: Cursor<'a, T>) -> Self {
        let distance = end - begin;
        assert!(
            distance >= 0,
            "Cursor range is reversed: begin {} is after end {}",
            begin.position(),
            end.position()
        );
        Self {
            items: &begin.items()[begin.position()..end.position()],
        }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { items: self.items }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.items.split_first()?;
        self.items = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.items = self.items.get(n..).unwrap_or_default();
        self.next()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = self.items.split_last()?;
        self.items = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.items).finish()
    }
}

/// Iterator over mutable references to the elements of a `GrowVec`
pub struct IterMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self { items }
    }

    /// The elements not yet yielded.
    #[must_use]
    pub fn into_slice(self) -> &'a mut [T] {
        self.items
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = mem::take(&mut self.items).split_first_mut()?;
        self.items = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = mem::take(&mut self.items).split_last_mut()?;
        self.items = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.items).finish()
    }
}

/// Iterator that moves the elements out of a `GrowVec`
///
/// Elements that are not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    // Live slots are `[front, back)`.
    front: usize,
    back: usize,
}

// SAFETY:
// `IntoIter<T>` owns the remaining elements and their buffer, exactly like the
// `GrowVec<T>` it came from.
unsafe impl<T: Send> Send for IntoIter<T> {}

// SAFETY:
// Shared access to the iterator hands out no references to the elements.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    fn remaining(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was inside the live range and is now excluded from it.
        Some(unsafe { self.buf.read(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` was the last live slot and is now excluded from the live range.
        Some(unsafe { self.buf.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.front < self.back {
            let index = self.front;
            self.front += 1;
            // SAFETY: `index` was live; advancing first keeps a panicking destructor
            // from dropping it twice.
            unsafe { self.buf.drop_in_place(index) };
        }
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        let len = this.len();
        // SAFETY: `this` is never dropped, so ownership of the buffer and its
        // live prefix moves into the iterator exactly once.
        let buf = unsafe { ptr::read(this.raw_buffer()) };
        IntoIter {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
