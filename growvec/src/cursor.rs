//! Random-access cursors over the live elements of a `GrowVec`.
//!
//! A cursor is a position in `[0, len]` over a borrowed view of the
//! elements; position `len` is the end cursor and cannot be dereferenced.
//! Because a cursor borrows the vector, nothing that reallocates or removes
//! elements can run while it is alive.
//!
//! | flavor             | type              | copyable |
//! |--------------------|-------------------|----------|
//! | forward, shared    | [`Cursor`]        | yes      |
//! | forward, mutable   | [`CursorMut`]     | no       |
//! | reverse, shared    | [`RevCursor`]     | yes      |
//! | reverse, mutable   | [`RevCursorMut`]  | no       |
//!
//! Reverse cursors wrap a forward cursor, their *base*, positioned one slot
//! after the element they refer to: `rbegin().base() == end()`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

use crate::iter::Iter;

/// Identity of the vector a cursor was taken from.
///
/// The element slice alone cannot tell vectors apart: every empty vector, and
/// every zero-sized vector of a given length, yields the same dangling slice.
/// The owner's address is stable for as long as a cursor borrows it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Origin(usize);

impl Origin {
    pub(crate) fn of<U: ?Sized>(owner: &U) -> Self {
        Self((owner as *const U).cast::<()>() as usize)
    }
}

/// Position reached by moving `n` slots from `position`, if it stays within `[0, len]`.
fn shifted(position: usize, len: usize, n: isize) -> Option<usize> {
    position.checked_add_signed(n).filter(|&p| p <= len)
}

fn shifted_or_panic(position: usize, len: usize, n: isize) -> usize {
    match shifted(position, len, n) {
        Some(p) => p,
        None => panic!("Cursor offset {n} from position {position} leaves range 0..={len}"),
    }
}

fn negated(n: isize) -> isize {
    match n.checked_neg() {
        Some(n) => n,
        None => panic!("Cursor offset {n} cannot be negated"),
    }
}

#[allow(clippy::cast_possible_wrap)]
fn signed_distance(from: usize, to: usize) -> isize {
    // Positions are bounded by a capacity, which never exceeds `isize::MAX`.
    to as isize - from as isize
}

fn no_element(position: usize, len: usize) -> ! {
    panic!("Cursor at position {position} does not point at an element of vector of length {len}")
}

/// Forward cursor with shared access.
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
    origin: Origin,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    /// # Panics
    ///
    /// Panics if `position > items.len()`.
    pub(crate) fn new(items: &'a [T], position: usize, origin: Origin) -> Self {
        assert!(
            position <= items.len(),
            "Cursor position {} out of range for vector of length {}",
            position,
            items.len()
        );
        Self {
            items,
            position,
            origin,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.items.len()
    }

    /// The element under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    /// Moves one slot forward (`++it`).
    ///
    /// # Panics
    ///
    /// Panics when called on the end cursor.
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Moves one slot back (`--it`).
    ///
    /// # Panics
    ///
    /// Panics when called on the first position.
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Moves one slot forward and returns the previous cursor (`it++`).
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    /// Moves one slot back and returns the previous cursor (`it--`).
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    /// The cursor `n` slots away, or `None` if that leaves `[0, len]`.
    #[must_use]
    pub fn checked_offset(self, n: isize) -> Option<Self> {
        let position = shifted(self.position, self.items.len(), n)?;
        Some(Self { position, ..self })
    }

    /// The element `n` slots away from the cursor (`it[n]`), with the
    /// lifetime of the underlying vector.
    ///
    /// # Panics
    ///
    /// Panics if there is no element at that position.
    #[must_use]
    pub fn at(&self, n: isize) -> &'a T {
        let position = shifted_or_panic(self.position, self.items.len(), n);
        match self.items.get(position) {
            Some(value) => value,
            None => no_element(position, self.items.len()),
        }
    }

    /// Turns the range `[self, end)` into an iterator.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another vector or precedes `self`.
    #[must_use]
    pub fn to(self, end: Self) -> Iter<'a, T> {
        Iter::from_cursors(self, end)
    }

    pub(crate) fn items(&self) -> &'a [T] {
        self.items
    }

    fn same_range(&self, other: &Self) -> bool {
        self.origin == other.origin
    }
}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => no_element(self.position, self.items.len()),
        }
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.at(n)
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.position = shifted_or_panic(self.position, self.items.len(), n);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        *self += negated(n);
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Signed distance `self - origin`.
///
/// # Panics
///
/// Panics if the cursors belong to different vectors.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        assert!(
            self.same_range(&origin),
            "Cannot measure distance between cursors of different vectors"
        );
        signed_distance(origin.position, self.position)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_range(other) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// Cursors of different vectors are unordered.
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_range(other)
            .then(|| self.position.cmp(&other.position))
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .finish()
    }
}

/// Forward cursor with exclusive access.
///
/// Only one mutable cursor into a vector can exist at a time. Use
/// [`CursorMut::as_cursor`] to compare it against shared cursors.
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    position: usize,
    origin: Origin,
}

impl<'a, T> CursorMut<'a, T> {
    /// # Panics
    ///
    /// Panics if `position > items.len()`.
    pub(crate) fn new(items: &'a mut [T], position: usize, origin: Origin) -> Self {
        assert!(
            position <= items.len(),
            "Cursor position {} out of range for vector of length {}",
            position,
            items.len()
        );
        Self {
            items,
            position,
            origin,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.items.len()
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.position)
    }

    /// Gives up the cursor for a reference to its element with the vector's lifetime.
    #[must_use]
    pub fn into_mut(self) -> Option<&'a mut T> {
        self.items.get_mut(self.position)
    }

    /// The elements from the cursor to the end, for in-place slice algorithms.
    #[must_use]
    pub fn into_tail(self) -> &'a mut [T] {
        let Self { items, position, .. } = self;
        &mut items[position..]
    }

    /// A shared cursor at the same position, borrowing this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.items, self.position, self.origin)
    }

    /// Moves one slot forward (`++it`).
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Moves one slot back (`--it`).
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// The cursor `n` slots away, or `None` if that leaves `[0, len]`.
    /// The cursor is consumed either way.
    #[must_use]
    pub fn checked_offset(self, n: isize) -> Option<Self> {
        let position = shifted(self.position, self.items.len(), n)?;
        Some(Self {
            items: self.items,
            position,
            origin: self.origin,
        })
    }

    /// Swaps the element under the cursor with the one `n` slots away.
    ///
    /// # Panics
    ///
    /// Panics if either position has no element.
    pub fn swap_with(&mut self, n: isize) {
        let len = self.items.len();
        let other = shifted_or_panic(self.position, len, n);
        if self.position == len {
            no_element(self.position, len);
        }
        if other == len {
            no_element(other, len);
        }
        self.items.swap(self.position, other);
    }

    fn element_index(&self, n: isize) -> usize {
        let len = self.items.len();
        let position = shifted_or_panic(self.position, len, n);
        if position == len {
            no_element(position, len);
        }
        position
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => no_element(self.position, self.items.len()),
        }
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        let (position, len) = (self.position, self.items.len());
        match self.get_mut() {
            Some(value) => value,
            None => no_element(position, len),
        }
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        &self.items[self.element_index(n)]
    }
}

impl<T> IndexMut<isize> for CursorMut<'_, T> {
    fn index_mut(&mut self, n: isize) -> &mut T {
        let position = self.element_index(n);
        &mut self.items[position]
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.position = shifted_or_panic(self.position, self.items.len(), n);
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        *self += negated(n);
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .finish()
    }
}

/// Reverse cursor with shared access.
///
/// Moving forward walks towards the first element.
pub struct RevCursor<'a, T> {
    base: Cursor<'a, T>,
}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<'_, T> {}

impl<'a, T> RevCursor<'a, T> {
    pub(crate) fn new(base: Cursor<'a, T>) -> Self {
        Self { base }
    }

    /// The forward cursor one slot after the element this cursor refers to.
    #[must_use]
    pub fn base(&self) -> Cursor<'a, T> {
        self.base
    }

    /// Number of steps taken from `rbegin()`.
    #[must_use]
    pub fn position(&self) -> usize {
        self.base.items.len() - self.base.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.base.position == 0
    }

    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        let index = self.base.position.checked_sub(1)?;
        self.base.items.get(index)
    }

    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }

    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    #[must_use]
    pub fn checked_offset(self, n: isize) -> Option<Self> {
        let base = self.base.checked_offset(n.checked_neg()?)?;
        Some(Self { base })
    }

    /// The element `n` steps further along the reverse order (`it[n]`).
    ///
    /// # Panics
    ///
    /// Panics if there is no element at that position.
    #[must_use]
    pub fn at(&self, n: isize) -> &'a T {
        let ahead = negated(n);
        self.base.at(ahead - 1)
    }

    /// Turns the range `[self, end)` into an iterator running backwards
    /// through the vector.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another vector or precedes `self`.
    #[must_use]
    pub fn to(self, end: Self) -> core::iter::Rev<Iter<'a, T>> {
        end.base.to(self.base).rev()
    }
}

impl<T> Deref for RevCursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => no_element(self.position(), self.base.items.len()),
        }
    }
}

impl<T> Index<isize> for RevCursor<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        self.at(n)
    }
}

impl<T> AddAssign<isize> for RevCursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.base -= n;
    }
}

impl<T> SubAssign<isize> for RevCursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.base += n;
    }
}

impl<T> Add<isize> for RevCursor<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for RevCursor<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for RevCursor<'_, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        origin.base - self.base
    }
}

impl<T> PartialEq for RevCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<T> Eq for RevCursor<'_, T> {}

impl<T> PartialOrd for RevCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<T> fmt::Debug for RevCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevCursor")
            .field("base", &self.base)
            .finish()
    }
}

/// Reverse cursor with exclusive access.
pub struct RevCursorMut<'a, T> {
    base: CursorMut<'a, T>,
}

impl<'a, T> RevCursorMut<'a, T> {
    pub(crate) fn new(base: CursorMut<'a, T>) -> Self {
        Self { base }
    }

    /// Gives up the reverse cursor for its forward base.
    #[must_use]
    pub fn into_base(self) -> CursorMut<'a, T> {
        self.base
    }

    /// A shared view of the base cursor.
    #[must_use]
    pub fn base(&self) -> Cursor<'_, T> {
        self.base.as_cursor()
    }

    #[must_use]
    pub fn as_rev_cursor(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.base.as_cursor())
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.base.items.len() - self.base.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.base.position == 0
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        let index = self.base.position.checked_sub(1)?;
        self.base.items.get(index)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.base.position.checked_sub(1)?;
        self.base.items.get_mut(index)
    }

    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }

    fn element_index(&self, n: isize) -> usize {
        let ahead = negated(n);
        self.base.element_index(ahead - 1)
    }
}

impl<T> Deref for RevCursorMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => no_element(self.position(), self.base.items.len()),
        }
    }
}

impl<T> DerefMut for RevCursorMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        let (position, len) = (self.position(), self.base.items.len());
        match self.get_mut() {
            Some(value) => value,
            None => no_element(position, len),
        }
    }
}

impl<T> Index<isize> for RevCursorMut<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        &self.base.items[self.element_index(n)]
    }
}

impl<T> IndexMut<isize> for RevCursorMut<'_, T> {
    fn index_mut(&mut self, n: isize) -> &mut T {
        let position = self.element_index(n);
        &mut self.base.items[position]
    }
}

impl<T> AddAssign<isize> for RevCursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.base -= n;
    }
}

impl<T> SubAssign<isize> for RevCursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.base += n;
    }
}

impl<T> fmt::Debug for RevCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevCursorMut")
            .field("base", &self.base)
            .finish()
    }
}
