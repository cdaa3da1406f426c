use alloc::alloc::{alloc, dealloc, Layout};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ptr::{self, NonNull};

use crate::error::GrowVecError;

/// Uninitialized storage for `cap` values of `T`.
///
/// The buffer knows nothing about which slots are live. It releases its
/// allocation on drop but never runs a destructor for `T`; that is the job of
/// whoever tracks the initialized prefix (`GrowVec` or [`InitGuard`]).
///
/// Zero-sized types never allocate. Their capacity is tracked logically so
/// the owning container sees the same growth as for sized types.
pub(crate) struct RawBuffer<T> {
    // # Invariants
    //
    // - `cap == 0` or `T` is zero-sized: `ptr` is dangling and owns nothing.
    // - otherwise `ptr` was returned by `alloc(Layout::array::<T>(cap))`.
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Acquires raw storage for exactly `cap` slots.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::CapacityOverflow` if `cap` slots of `T` exceed `isize::MAX` bytes,
    ///   or if `cap` itself exceeds `isize::MAX` (zero-sized `T`).
    /// - `GrowVecError::AllocationFailed` if the global allocator returns null.
    pub(crate) fn try_allocate(cap: usize) -> Result<Self, GrowVecError> {
        // Positions must stay representable as `isize` cursor distances.
        if cap > isize::MAX as usize {
            return Err(GrowVecError::CapacityOverflow { requested: cap });
        }
        if cap == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout_for(cap)?;
        // SAFETY: `layout` has a non-zero size, since `cap > 0` and `T` is not zero-sized.
        let raw = unsafe { alloc(layout) }.cast::<T>();
        let Some(ptr) = NonNull::new(raw) else {
            log::debug!(
                "allocator refused {} bytes for {} slots",
                layout.size(),
                cap
            );
            return Err(GrowVecError::AllocationFailed {
                requested: cap,
                bytes: layout.size(),
            });
        };

        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    fn layout_for(cap: usize) -> Result<Layout, GrowVecError> {
        Layout::array::<T>(cap).map_err(|_| GrowVecError::CapacityOverflow { requested: cap })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Constructs `value` in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < self.capacity()` and the slot must not hold a live value,
    /// otherwise that value is leaked.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.cap);
        // SAFETY: the caller guarantees the slot is in bounds.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }

    /// Moves the value out of slot `index`, leaving the slot raw.
    ///
    /// # Safety
    ///
    /// `index < self.capacity()` and the slot must hold a live value.
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.cap);
        // SAFETY: the caller guarantees the slot is in bounds and initialized.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    /// Destroys the value in slot `index` without releasing storage.
    ///
    /// # Safety
    ///
    /// `index < self.capacity()` and the slot must hold a live value.
    pub(crate) unsafe fn drop_in_place(&mut self, index: usize) {
        debug_assert!(index < self.cap);
        // SAFETY: the caller guarantees the slot is in bounds and initialized.
        unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(index)) }
    }

    /// Moves the first `count` values into `dst`, slot for slot.
    ///
    /// Afterwards the source slots are raw: dropping `self` releases its
    /// storage without touching the moved values.
    ///
    /// # Safety
    ///
    /// - slots `[0, count)` of `self` must be live.
    /// - `count <= dst.capacity()` and slots `[0, count)` of `dst` must be raw.
    pub(crate) unsafe fn relocate_into(&self, dst: &mut RawBuffer<T>, count: usize) {
        debug_assert!(count <= self.cap && count <= dst.cap);
        // SAFETY:
        // - both regions are valid for `count` values, guaranteed by the caller.
        // - two distinct allocations never overlap.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), dst.ptr.as_ptr(), count) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        if let Ok(layout) = Self::layout_for(self.cap) {
            // SAFETY: `ptr` was allocated with this exact layout, see the invariants.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

/// Builds the initialized prefix of a fresh [`RawBuffer`] one value at a time.
///
/// If the guard is dropped before [`InitGuard::finish`], for example because
/// producing the next value panicked, the values written so far are destroyed
/// in reverse order and the storage is released.
pub(crate) struct InitGuard<T> {
    buf: RawBuffer<T>,
    initialized: usize,
}

impl<T> InitGuard<T> {
    pub(crate) fn new(buf: RawBuffer<T>) -> Self {
        Self {
            buf,
            initialized: 0,
        }
    }

    /// Writes `value` into the next raw slot.
    ///
    /// # Panics
    ///
    /// Panics if every slot is already initialized.
    pub(crate) fn push(&mut self, value: T) {
        assert!(
            self.initialized < self.buf.capacity(),
            "InitGuard overrun: capacity {}",
            self.buf.capacity()
        );
        // SAFETY: the slot is in bounds (checked above) and past the initialized prefix.
        unsafe { self.buf.write(self.initialized, value) };
        self.initialized += 1;
    }

    /// Hands the buffer and its initialized length to the caller.
    pub(crate) fn finish(self) -> (RawBuffer<T>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `buf` is moved out exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.initialized)
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        while self.initialized > 0 {
            self.initialized -= 1;
            // SAFETY: every slot below the old `initialized` is live.
            unsafe { self.buf.drop_in_place(self.initialized) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    struct Noisy<'a> {
        id: usize,
        log: &'a RefCell<Vec<usize>>,
    }

    impl Drop for Noisy<'_> {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_zero_capacity_does_not_allocate() {
        let buf = RawBuffer::<u64>::try_allocate(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.as_ptr(), NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn test_zst_capacity_is_logical() {
        let buf = RawBuffer::<()>::try_allocate(1024).unwrap();
        assert_eq!(buf.capacity(), 1024);
        assert_eq!(buf.as_ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    fn test_zst_capacity_beyond_isize_is_rejected() {
        let result = RawBuffer::<()>::try_allocate(usize::MAX);
        assert_eq!(
            result.err(),
            Some(GrowVecError::CapacityOverflow {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_layout_overflow_is_reported() {
        let result = RawBuffer::<u64>::try_allocate(usize::MAX / 4);
        assert_eq!(
            result.err(),
            Some(GrowVecError::CapacityOverflow {
                requested: usize::MAX / 4
            })
        );
    }

    #[test]
    fn test_write_read_roundtrip_leaves_slot_raw() {
        let mut buf = RawBuffer::<u32>::try_allocate(4).unwrap();
        unsafe {
            buf.write(2, 77);
            assert_eq!(buf.read(2), 77);
        }
    }

    #[test]
    fn test_relocate_moves_values() {
        let mut src = RawBuffer::<u32>::try_allocate(2).unwrap();
        let mut dst = RawBuffer::<u32>::try_allocate(4).unwrap();
        unsafe {
            src.write(0, 1);
            src.write(1, 2);
            src.relocate_into(&mut dst, 2);
            assert_eq!(dst.read(0), 1);
            assert_eq!(dst.read(1), 2);
        }
    }

    #[test]
    fn test_guard_rolls_back_in_reverse_order() {
        let log = RefCell::new(Vec::new());
        {
            let mut guard = InitGuard::new(RawBuffer::try_allocate(4).unwrap());
            for id in 0..3 {
                guard.push(Noisy { id, log: &log });
            }
            // dropped without finish()
        }
        assert_eq!(*log.borrow(), [2, 1, 0]);
    }

    #[test]
    fn test_guard_finish_keeps_values_alive() {
        let log = RefCell::new(Vec::new());
        let mut guard = InitGuard::new(RawBuffer::try_allocate(2).unwrap());
        guard.push(Noisy { id: 7, log: &log });
        let (mut buf, len) = guard.finish();
        assert_eq!(len, 1);
        assert!(log.borrow().is_empty());
        unsafe { buf.drop_in_place(0) };
        assert_eq!(*log.borrow(), [7]);
    }

    #[test]
    #[should_panic(expected = "InitGuard overrun")]
    fn test_guard_overrun_panics() {
        let mut guard = InitGuard::new(RawBuffer::<u8>::try_allocate(1).unwrap());
        guard.push(1);
        guard.push(2);
    }
}
