use growvec::{growvec, GrowVec};

#[test]
fn test_begin_end_on_empty_vector() {
    let vec: GrowVec<i32> = GrowVec::new();

    assert_eq!(vec.begin(), vec.end());
    assert_eq!(vec.cbegin(), vec.cend());
    assert_eq!(vec.end() - vec.begin(), 0);
    assert!(vec.begin().is_end());
    assert!(vec.begin().get().is_none());
}

#[test]
fn test_forward_traversal() {
    let vec = growvec![10, 20, 30];

    let mut it = vec.begin();
    assert_eq!(*it, 10);
    it.inc();
    assert_eq!(*it, 20);
    it.inc().inc();
    assert_eq!(it, vec.end());

    let mut result = Vec::new();
    let mut it = vec.begin();
    while it != vec.end() {
        result.push(*it);
        it.inc();
    }
    assert_eq!(result, [10, 20, 30]);
}

#[test]
fn test_pre_and_post_increment() {
    let vec = growvec![1, 2, 3];

    let mut it = vec.begin();
    let before = it.post_inc();
    assert_eq!(*before, 1);
    assert_eq!(*it, 2);

    let after = *it.inc();
    assert_eq!(*after, 3);

    let before = it.post_dec();
    assert_eq!(*before, 3);
    assert_eq!(*it, 2);

    it.dec();
    assert_eq!(it, vec.begin());
}

#[test]
fn test_arithmetic() {
    let vec = growvec![10, 20, 30, 40, 50];

    let begin = vec.begin();
    let it = begin + 2;
    assert_eq!(*it, 30);
    assert_eq!(*(it - 1), 20);
    assert_eq!(it - begin, 2);
    assert_eq!(begin - it, -2);
    assert_eq!(vec.end() - vec.begin(), 5);

    let mut moved = begin;
    moved += 4;
    assert_eq!(*moved, 50);
    moved -= 3;
    assert_eq!(*moved, 20);
    moved += -1;
    assert_eq!(moved, begin);
}

#[test]
fn test_offset_round_trip() {
    let vec: GrowVec<usize> = (0..8).collect();

    for position in 0..=vec.len() {
        let it = vec.cursor_at(position);
        for k in 0..=(vec.len() - position) {
            let k = k as isize;
            assert_eq!((it + k) - k, it);
            assert_eq!((it + k) - it, k);
        }
    }
}

#[test]
fn test_subscript() {
    let vec = growvec![10, 20, 30, 40];

    let it = vec.begin() + 1;
    assert_eq!(it[0], 20);
    assert_eq!(it[2], 40);
    assert_eq!(it[-1], 10);
    assert_eq!(*it.at(1), 30);
}

#[test]
fn test_ordering() {
    let vec = growvec![1, 2, 3];

    let a = vec.begin();
    let b = vec.begin() + 2;

    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a <= a);
    assert!(a != b);
    assert!(vec.end() > b);
}

#[test]
fn test_cursors_of_different_vectors() {
    let first = growvec![1, 2];
    let second = growvec![1, 2];

    assert_ne!(first.begin(), second.begin());
    assert_eq!(first.begin().partial_cmp(&second.begin()), None);
}

#[test]
fn test_cursors_of_different_empty_vectors() {
    let first: GrowVec<u8> = GrowVec::new();
    let second: GrowVec<u8> = GrowVec::new();

    assert_ne!(first.begin(), second.begin());
    assert_ne!(first.end(), second.end());
    assert_eq!(first.begin().partial_cmp(&second.begin()), None);
    assert_ne!(first.rbegin(), second.rbegin());
}

#[test]
fn test_cursors_of_different_zero_sized_vectors() {
    let first = growvec![(), ()];
    let second = growvec![(), ()];

    assert_ne!(first.begin(), second.begin());
    assert_eq!(first.begin(), first.begin());
    assert_eq!(first.end() - first.begin(), 2);
}

#[test]
#[should_panic(expected = "different vectors")]
fn test_distance_between_empty_vectors_panics() {
    let first: GrowVec<u8> = GrowVec::new();
    let second: GrowVec<u8> = GrowVec::new();
    let _ = second.end() - first.begin();
}

#[test]
fn test_shared_view_of_mutable_cursor_matches() {
    let mut vec: GrowVec<u8> = GrowVec::new();
    let it = vec.begin_mut();
    assert!(it.as_cursor().is_end());
    assert_eq!(it.as_cursor().position(), 0);
}

#[test]
fn test_checked_offset() {
    let vec = growvec![1, 2, 3];

    assert_eq!(vec.begin().checked_offset(3), Some(vec.end()));
    assert_eq!(vec.begin().checked_offset(4), None);
    assert_eq!(vec.begin().checked_offset(-1), None);
    assert_eq!(vec.end().checked_offset(-3), Some(vec.begin()));
}

#[test]
fn test_cursor_outlives_temporary_borrow() {
    let vec = growvec![String::from("a"), String::from("b")];

    let element: &String = {
        let it = vec.begin() + 1;
        it.get().unwrap()
    };
    assert_eq!(element, "b");
}

#[test]
fn test_modify_through_mutable_cursor() {
    let mut vec = growvec![1, 2, 3];

    let mut it = vec.begin_mut();
    *it = 100;
    it.inc();
    *it += 1;
    it[1] = 300;
    assert_eq!(it.position(), 1);

    assert_eq!(vec, [100, 3, 300]);
}

#[test]
fn test_mutable_cursor_walk_to_end() {
    let mut vec = growvec![1, 2, 3];

    let mut it = vec.begin_mut();
    while !it.is_end() {
        *it *= 10;
        it.inc();
    }
    assert!(it.get_mut().is_none());

    assert_eq!(vec, [10, 20, 30]);
}

#[test]
fn test_mutable_cursor_swap_and_tail() {
    let mut vec = growvec![5, 4, 3, 2, 1];

    let mut it = vec.cursor_mut_at(1);
    it.swap_with(2);
    let tail = it.into_tail();
    tail.sort_unstable();

    assert_eq!(vec, [5, 1, 2, 3, 4]);
}

#[test]
fn test_mutable_cursor_as_shared() {
    let mut vec = growvec![1, 2, 3];

    let it = vec.end_mut() - 1;
    let shared = it.as_cursor();
    assert_eq!(*shared, 3);
    assert_eq!(shared.position(), 2);

    let value = it.into_mut().unwrap();
    *value = 7;
    assert_eq!(vec[2], 7);
}

#[test]
fn test_mutable_cursor_checked_offset() {
    let mut vec = growvec![1, 2];

    assert!(vec.begin_mut().checked_offset(3).is_none());
    let end = vec.begin_mut().checked_offset(2).unwrap();
    assert!(end.is_end());
}

#[test]
fn test_debug_output() {
    let vec = growvec![1, 2];
    let it = vec.begin() + 1;

    assert_eq!(format!("{it:?}"), "Cursor { position: 1, len: 2 }");
}

#[test]
#[should_panic(expected = "does not point at an element")]
fn test_dereferencing_end_panics() {
    let vec = growvec![1, 2];
    let value: i32 = *vec.end();
    assert_eq!(value, 0);
}

#[test]
#[should_panic(expected = "leaves range")]
fn test_offset_past_end_panics() {
    let vec = growvec![1, 2];
    let _ = vec.begin() + 3;
}

#[test]
#[should_panic(expected = "leaves range")]
fn test_decrement_before_begin_panics() {
    let vec = growvec![1];
    let mut it = vec.begin();
    it.dec();
}

#[test]
#[should_panic(expected = "different vectors")]
fn test_distance_between_vectors_panics() {
    let first = growvec![1];
    let second = growvec![1];
    let _ = first.end() - second.begin();
}

#[test]
#[should_panic(expected = "Cursor position 3 out of range")]
fn test_cursor_at_past_end_panics() {
    let vec = growvec![1, 2];
    let _ = vec.cursor_at(3);
}
