//! Cursor-returning algorithms over `[first, last)` ranges.
//!
//! Algorithms that produce a value (counting, summing, `all`/`any`) are
//! already covered by [`Iterator`]: turn a range into an iterator with
//! [`Cursor::to`] or [`RevCursor::to`]. In-place reordering such as sorting
//! and reversing is done on the slice a `GrowVec` dereferences to.
//!
//! ```
//! use growvec::{algo, growvec};
//!
//! let v = growvec![10, 50, 30, 20];
//! assert_eq!(*algo::max_element(v.begin(), v.end()), 50);
//! assert_eq!(algo::find(v.begin(), v.end(), &99), v.end());
//! assert_eq!(v.begin().to(v.end()).filter(|x| **x > 15).count(), 3);
//! ```

use crate::cursor::{Cursor, RevCursor};

/// Shared random-access cursor, implemented by [`Cursor`] and [`RevCursor`].
pub trait RandomAccess<'a>: Copy + PartialEq {
    /// Element type the cursor refers to.
    type Item: 'a;

    /// The element under the cursor, `None` at the end of its direction.
    fn element(&self) -> Option<&'a Self::Item>;

    /// Moves the cursor `n` steps along its direction.
    fn advance_by(&mut self, n: isize);

    /// Signed number of steps from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;
}

impl<'a, T: 'a> RandomAccess<'a> for Cursor<'a, T> {
    type Item = T;

    fn element(&self) -> Option<&'a T> {
        self.get()
    }

    fn advance_by(&mut self, n: isize) {
        *self += n;
    }

    fn distance_from(&self, origin: &Self) -> isize {
        *self - *origin
    }
}

impl<'a, T: 'a> RandomAccess<'a> for RevCursor<'a, T> {
    type Item = T;

    fn element(&self) -> Option<&'a T> {
        self.get()
    }

    fn advance_by(&mut self, n: isize) {
        *self += n;
    }

    fn distance_from(&self, origin: &Self) -> isize {
        *self - *origin
    }
}

/// First cursor in `[first, last)` whose element satisfies `pred`, or `last`.
pub fn find_if<'a, C, P>(first: C, last: C, mut pred: P) -> C
where
    C: RandomAccess<'a>,
    P: FnMut(&C::Item) -> bool,
{
    let mut it = first;
    while it != last {
        match it.element() {
            Some(value) if pred(value) => return it,
            Some(_) => it.advance_by(1),
            None => break,
        }
    }
    last
}

/// First cursor in `[first, last)` whose element equals `value`, or `last`.
pub fn find<'a, C>(first: C, last: C, value: &C::Item) -> C
where
    C: RandomAccess<'a>,
    C::Item: PartialEq,
{
    find_if(first, last, |candidate| candidate == value)
}

/// Cursor at the first smallest element, or `last` if the range is empty.
pub fn min_element<'a, C>(first: C, last: C) -> C
where
    C: RandomAccess<'a>,
    C::Item: PartialOrd,
{
    best_by(first, last, |candidate, best| candidate < best)
}

/// Cursor at the first largest element, or `last` if the range is empty.
pub fn max_element<'a, C>(first: C, last: C) -> C
where
    C: RandomAccess<'a>,
    C::Item: PartialOrd,
{
    best_by(first, last, |candidate, best| candidate > best)
}

/// Keeps the earliest element that no later element beats.
fn best_by<'a, C, F>(first: C, last: C, mut beats: F) -> C
where
    C: RandomAccess<'a>,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let mut best = first;
    let mut it = first;
    it.advance_by(1);
    while it != last {
        if let (Some(candidate), Some(current)) = (it.element(), best.element()) {
            if beats(candidate, current) {
                best = it;
            }
        }
        it.advance_by(1);
    }
    best
}

/// Signed number of steps from `first` to `last`.
pub fn distance<'a, C: RandomAccess<'a>>(first: C, last: C) -> isize {
    last.distance_from(&first)
}

/// Moves `it` by `n` steps; negative `n` moves backwards.
///
/// # Panics
///
/// Panics if the cursor would leave its vector's `[begin, end]` range.
pub fn advance<'a, C: RandomAccess<'a>>(it: &mut C, n: isize) {
    it.advance_by(n);
}
