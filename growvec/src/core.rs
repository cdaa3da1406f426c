use core::mem;
use core::slice;

use alloc::alloc::{handle_alloc_error, Layout};

use crate::cursor::{Cursor, CursorMut, Origin, RevCursor, RevCursorMut};
use crate::error::GrowVecError;
use crate::iter::{Iter, IterMut};
use crate::raw::{InitGuard, RawBuffer};

const GROWTH_FACTOR: usize = 2;

/// A contiguous growable vector that owns its storage explicitly.
///
/// Live elements occupy the prefix `[0, len)` of a single heap buffer with room
/// for `capacity` elements. Slots past `len` are raw storage and are never read.
pub struct GrowVec<T> {
    buf: RawBuffer<T>,
    len: usize,
}

// SAFETY:
// `GrowVec<T>` owns its elements exactly like `Vec<T>` does, so it may cross
// threads whenever `T` may.
unsafe impl<T: Send> Send for GrowVec<T> {}

// SAFETY:
// Shared access only hands out `&T`, same reasoning as for `Vec<T>`.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> GrowVec<T> {
    /// Converts a storage error into the behavior of the infallible API:
    /// abort through the allocation error handler, or panic on overflow.
    pub(crate) fn infallible<R>(result: Result<R, GrowVecError>) -> R {
        match result {
            Ok(value) => value,
            Err(GrowVecError::AllocationFailed { bytes, .. }) => {
                let layout = Layout::from_size_align(bytes, mem::align_of::<T>())
                    .unwrap_or(Layout::new::<T>());
                handle_alloc_error(layout)
            }
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows `isize::MAX` bytes. Aborts through
    /// `handle_alloc_error` if the allocator fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::infallible(Self::try_with_capacity(capacity))
    }

    /// Fallible version of [`GrowVec::with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or `GrowVecError::AllocationFailed`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        Ok(Self {
            buf: RawBuffer::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector holding `len` default-constructed elements, with
    /// `capacity() == len`.
    ///
    /// If `T::default()` panics, the elements built so far are dropped in
    /// reverse order and the buffer is released before the panic continues.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow, see [`GrowVec::with_capacity`].
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::infallible(Self::try_with_len(len))
    }

    /// Fallible version of [`GrowVec::with_len`].
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or `GrowVecError::AllocationFailed`.
    pub fn try_with_len(len: usize) -> Result<Self, GrowVecError>
    where
        T: Default,
    {
        let mut guard = InitGuard::new(RawBuffer::try_allocate(len)?);
        for _ in 0..len {
            guard.push(T::default());
        }
        let (buf, len) = guard.finish();
        Ok(Self { buf, len })
    }

    /// Builds a vector holding clones of `items`, with `capacity() == items.len()`.
    ///
    /// If a `clone` panics, the clones made so far are dropped in reverse
    /// order and the new buffer is released; `items` is never touched.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or `GrowVecError::AllocationFailed`.
    pub fn try_from_slice(items: &[T]) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        let mut guard = InitGuard::new(RawBuffer::try_allocate(items.len())?);
        for item in items {
            guard.push(item.clone());
        }
        let (buf, len) = guard.finish();
        Ok(Self { buf, len })
    }

    /// Fallible version of `clone`.
    ///
    /// # Errors
    ///
    /// See [`GrowVec::try_from_slice`].
    pub fn try_clone(&self) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        Self::try_from_slice(self.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the buffer to hold exactly `new_capacity` elements in total.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not the
    /// number of additional elements. Requests at or below the current
    /// capacity do nothing; capacity never shrinks.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        Self::infallible(self.try_reserve(new_capacity));
    }

    /// Fallible version of [`GrowVec::reserve`].
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or `GrowVecError::AllocationFailed`.
    /// The vector is left unchanged on error.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut new_buf = RawBuffer::try_allocate(new_capacity)?;
        log::trace!(
            "reallocating {} live elements: capacity {} -> {}",
            self.len,
            self.capacity(),
            new_capacity
        );
        // SAFETY:
        // - `[0, len)` is live in the old buffer.
        // - the new buffer is fresh and `len <= capacity < new_capacity`.
        unsafe { self.buf.relocate_into(&mut new_buf, self.len) };
        // The old buffer's slots are now raw; dropping it only releases storage.
        self.buf = new_buf;
        Ok(())
    }

    fn grown_capacity(&self) -> Result<usize, GrowVecError> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap
                .checked_mul(GROWTH_FACTOR)
                .ok_or(GrowVecError::CapacityOverflow { requested: cap }),
        }
    }

    /// Makes room for `additional` more elements under the growth policy:
    /// the new capacity is the larger of what is needed and the doubled one.
    pub(crate) fn try_reserve_amortized(&mut self, additional: usize) -> Result<(), GrowVecError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(GrowVecError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        if needed <= self.capacity() {
            return Ok(());
        }
        let new_capacity = self
            .grown_capacity()
            .map_or(needed, |grown| grown.max(needed));
        self.try_reserve(new_capacity)
    }

    /// Appends `value` at the tail, doubling the capacity when full.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Aborts through `handle_alloc_error` if
    /// the allocator fails.
    pub fn push(&mut self, value: T) {
        Self::infallible(self.try_push(value));
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or `GrowVecError::AllocationFailed`
    /// if growing fails. The vector is left unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), GrowVecError> {
        self.try_reserve_amortized(1)?;
        // SAFETY: `len < capacity` after the reservation, and slot `len` is raw.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Appends a clone of `value` at the tail.
    ///
    /// The clone is made before any reallocation, so a panicking `clone`
    /// leaves the vector untouched.
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    /// Fallible version of [`GrowVec::push_cloned`].
    ///
    /// # Errors
    ///
    /// See [`GrowVec::try_push`].
    pub fn try_push_cloned(&mut self, value: &T) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        self.try_push(value.clone())
    }

    /// Removes the last element and returns it.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot; it is raw from now on.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_pop(&mut self) -> Result<T, GrowVecError> {
        self.pop().ok_or(GrowVecError::EmptyVector)
    }

    /// Destroys the last element in place.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn remove_last(&mut self) -> Result<(), GrowVecError> {
        if self.len == 0 {
            return Err(GrowVecError::EmptyVector);
        }
        // Shrink first: if the destructor panics the slot is already out of the live prefix.
        self.len -= 1;
        // SAFETY: slot `len` was live until the line above.
        unsafe { self.buf.drop_in_place(self.len) };
        Ok(())
    }

    /// Drops every element in index order. Capacity is kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY:
        // `live` covers the former live prefix, which is no longer reachable
        // through `self`; `drop_in_place` on a slice keeps dropping the rest
        // if one destructor panics.
        unsafe { core::ptr::drop_in_place(live) };
    }

    /// Moves the contents of `source` into `self`, leaving `source` empty
    /// with no allocation. The previous contents of `self` are dropped.
    pub fn assign_take(&mut self, source: &mut Self) {
        *self = mem::take(source);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, GrowVecError> {
        let length = self.len;
        self.get(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, length })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, length })
    }

    /// Returns the last element, the top of the stack.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_last(&self) -> Result<&T, GrowVecError> {
        self.last().ok_or(GrowVecError::EmptyVector)
    }

    pub(crate) fn raw_buffer(&self) -> &RawBuffer<T> {
        &self.buf
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live and the pointer is aligned, dangling only when `len == 0`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator from the last element to the first.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    #[must_use]
    pub fn iter_mut_rev(&mut self) -> core::iter::Rev<IterMut<'_, T>> {
        self.iter_mut().rev()
    }

    /// Cursor at the first element, equal to [`GrowVec::end`] when empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0, Origin::of(self))
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len, Origin::of(self))
    }

    #[must_use]
    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    #[must_use]
    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    /// Cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    #[must_use]
    pub fn cursor_at(&self, position: usize) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), position, Origin::of(self))
    }

    #[must_use]
    pub fn rbegin(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.end())
    }

    #[must_use]
    pub fn rend(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.begin())
    }

    #[must_use]
    pub fn crbegin(&self) -> RevCursor<'_, T> {
        self.rbegin()
    }

    #[must_use]
    pub fn crend(&self) -> RevCursor<'_, T> {
        self.rend()
    }

    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let origin = Origin::of(self);
        CursorMut::new(self.as_mut_slice(), 0, origin)
    }

    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let (len, origin) = (self.len, Origin::of(self));
        CursorMut::new(self.as_mut_slice(), len, origin)
    }

    /// Mutable cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    #[must_use]
    pub fn cursor_mut_at(&mut self, position: usize) -> CursorMut<'_, T> {
        let origin = Origin::of(self);
        CursorMut::new(self.as_mut_slice(), position, origin)
    }

    #[must_use]
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_, T> {
        RevCursorMut::new(self.end_mut())
    }

    #[must_use]
    pub fn rend_mut(&mut self) -> RevCursorMut<'_, T> {
        RevCursorMut::new(self.begin_mut())
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
        // `buf` releases the storage when it is dropped right after this.
    }
}
