#![no_std]

//! `GrowVec`: a contiguous growable vector that manages its storage explicitly.
//!
//! `GrowVec<T>` owns one heap buffer sized for `capacity` elements and keeps
//! its `len` live elements in the prefix `[0, len)`. Allocation is separate
//! from initialization: slots past `len` are raw storage, values are written
//! into them one at a time, destroyed in place, and the storage itself is
//! released only when the vector is dropped or grows.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Memory layout
//!
//! ```text
//!   Stack                  |   Heap
//!   -----                  |   ----
//!  +-----------------+     |
//!  | ptr   (8 bytes) | --------> +------------------+
//!  | cap   (8 bytes) |     |     | 12      (live)   |
//!  | len   (8 bytes) |     |     | 151     (live)   |
//!  +-----------------+     |     | 2       (live)   |
//!                          |     | ??      (raw)    |
//!                          |     +------------------+
//! ```
//!
//! An empty vector holds a dangling pointer and no allocation.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: amortized O(1); capacity doubles (`0 -> 1 -> 2 -> 4 -> ...`)
//!   when full, so `n` pushes reallocate `O(log n)` times
//! - `pop()`, `get()`, indexing: O(1)
//! - `reserve(n)`: O(len) when it reallocates, O(1) otherwise
//! - `clear()`: O(len) destructor calls, no deallocation
//!
//! ## Growth
//! `reserve(n)` takes the **total** capacity, not an additional amount, and
//! allocates exactly `n` slots. Capacity never shrinks.
//!
//! # Failure Safety
//!
//! - Every allocating operation has a `try_` variant returning
//!   [`GrowVecError`]; on error the vector is unchanged.
//! - Growth relocates elements bitwise and cannot fail midway.
//! - If `T::clone` or `T::default` panics while a new vector is being built,
//!   the elements built so far are dropped in reverse order and the new
//!   buffer is released.
//!
//! # Stack Interface
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let mut stack = GrowVec::new();
//! stack.push("first");
//! stack.push("second");
//!
//! assert_eq!(stack.last(), Some(&"second"));
//! assert_eq!(stack.pop(), Some("second"));
//! assert_eq!(stack.pop(), Some("first"));
//!
//! assert_eq!(stack.try_pop(), Err(GrowVecError::EmptyVector));
//! assert_eq!(stack.capacity(), 2);
//! ```
//!
//! # Cursors
//!
//! Besides Rust iterators, `GrowVec` hands out random-access cursors in four
//! flavors (see [`cursor`]) that support offsets, distances, ordering and
//! `it[n]` indexing:
//!
//! ```
//! use growvec::growvec;
//!
//! let v = growvec![10, 20, 30];
//!
//! let begin = v.begin();
//! assert_eq!(*begin, 10);
//! assert_eq!(begin[2], 30);
//! assert_eq!(v.end() - begin, 3);
//! assert_eq!(*(begin + 1), 20);
//!
//! // Reverse cursors start at the last element; `base()` is one slot ahead.
//! assert_eq!(*v.rbegin(), 30);
//! assert_eq!(v.rbegin().base(), v.end());
//!
//! // Any cursor range is also an iterator.
//! let sum: i32 = v.begin().to(v.end()).sum();
//! assert_eq!(sum, 60);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v: GrowVec<u32> = (1..=4).collect();
//!
//! for value in &mut v {
//!     *value *= 10;
//! }
//! let collected: Vec<_> = v.iter_rev().copied().collect();
//! assert_eq!(collected, [40, 30, 20, 10]);
//!
//! // `GrowVec` dereferences to a slice, so slice algorithms apply directly.
//! v.reverse();
//! v.sort_unstable();
//! assert_eq!(v, [10, 20, 30, 40]);
//! ```

extern crate alloc;

pub mod algo;
mod core;
pub mod cursor;
mod error;
mod iter;
mod macros;
mod raw;
mod traits;

// Re-export public types and traits
pub use crate::core::GrowVec;
pub use cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
pub use error::GrowVecError;
pub use iter::{IntoIter, Iter, IterMut};
