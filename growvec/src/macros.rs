/// Creates a `GrowVec` containing the arguments.
///
/// ```rust
/// use growvec::growvec;
///
/// let v = growvec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
/// assert_eq!(v[2], 3);
///
/// let v = growvec![7; 3];
/// assert_eq!(v, [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! growvec {
    (@UNIT $($t:tt)*) => (());

    ($elem:expr; $n:expr) => ({
        let count = $n;
        let elem = $elem;
        let mut vec = $crate::GrowVec::with_capacity(count);
        for _ in 0..count {
            vec.push_cloned(&elem);
        }
        vec
    });
    () => {$crate::GrowVec::new()};
    ($($x:expr),+ $(,)?) => ({
        let len = [$($crate::growvec!(@UNIT $x)),+].len();
        let mut vec = $crate::GrowVec::with_capacity(len);
        $(vec.push($x);)+
        vec
    });
}
