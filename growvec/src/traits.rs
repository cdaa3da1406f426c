use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};

use alloc::vec::Vec;

use crate::core::GrowVec;

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with `capacity() == len()`.
///
/// `clone_from` keeps the default behavior of building the copy first and
/// then replacing `self`, so a panicking element clone leaves the target
/// untouched.
impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        Self::infallible(self.try_clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for GrowVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for GrowVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// # Panics
///
/// Panics if `index` is out of bounds. Use [`GrowVec::try_get`] for a
/// recoverable error.
impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let length = self.len();
        match self.get(index) {
            Some(value) => value,
            None => panic!("Index {index} out of bounds for vector of length {length}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("Index {index} out of bounds for vector of length {length}"),
        }
    }
}

impl<T, U> PartialEq<GrowVec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T, U> PartialEq<[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        Self::infallible(self.try_reserve_amortized(lower));
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(items: &[T]) -> Self {
        Self::infallible(Self::try_from_slice(items))
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(items: GrowVec<T>) -> Self {
        items.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn test_debug_formats_as_list() {
        let vec: GrowVec<i32> = [1, 2, 3].into();
        assert_eq!(format!("{vec:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_extend_reserves_lower_bound_once() {
        let mut vec: GrowVec<u8> = GrowVec::new();
        vec.extend([1, 2, 3, 4, 5]);
        assert_eq!(vec.capacity(), 5);
        assert_eq!(vec, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_past_capacity_doubles() {
        let mut vec: GrowVec<u8> = (0..4).collect();
        assert_eq!(vec.capacity(), 4);
        vec.extend([9]);
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn test_extend_by_reference_clones() {
        let source = [String::from("a"), String::from("b")];
        let mut vec: GrowVec<String> = GrowVec::new();
        vec.extend(source.iter());
        assert_eq!(vec, source);
    }

    #[test]
    fn test_from_slice_is_exact() {
        let vec = GrowVec::from(&[1u32, 2, 3][..]);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a: GrowVec<i32> = [1, 2].into();
        let b: GrowVec<i32> = [1, 3].into();
        let c: GrowVec<i32> = [1, 2, 0].into();
        assert!(a < b);
        assert!(a < c);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
