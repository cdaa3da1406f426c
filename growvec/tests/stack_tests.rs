use growvec::{GrowVec, GrowVecError};

#[test]
fn test_stack_push_operations() {
    let mut stack = GrowVec::new();

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);

    stack.push("first");
    assert_eq!(stack.len(), 1);
    assert!(!stack.is_empty());

    stack.push("second");
    assert_eq!(stack.len(), 2);

    stack.push("third");
    assert_eq!(stack.len(), 3);

    // Insertion order is kept from the bottom of the stack
    assert_eq!(stack[0], "first");
    assert_eq!(stack[1], "second");
    assert_eq!(stack[2], "third");
}

#[test]
fn test_stack_push_pop_operations() {
    let mut stack = GrowVec::new();

    stack.push(5);
    stack.push(9);

    assert_eq!(stack.pop(), Some(9));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack[0], 5);

    assert_eq!(stack.pop(), Some(5));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_lifo_after_growth() {
    let mut stack = GrowVec::new();
    for i in 0..17 {
        stack.push(i);
    }

    for expected in (0..17).rev() {
        assert_eq!(stack.pop(), Some(expected));
    }
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.capacity(), 32);
}

#[test]
fn test_stack_top_operations() {
    let mut stack = GrowVec::new();

    assert_eq!(stack.last(), None);
    assert_eq!(stack.try_last(), Err(GrowVecError::EmptyVector));

    stack.push(String::from("bottom"));
    stack.push(String::from("top"));

    assert_eq!(stack.last().map(String::as_str), Some("top"));
    stack.last_mut().unwrap().push_str("most");
    assert_eq!(stack.try_last().unwrap(), "topmost");
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_try_pop() {
    let mut stack = GrowVec::new();
    stack.push(1);

    assert_eq!(stack.try_pop(), Ok(1));
    assert_eq!(stack.try_pop(), Err(GrowVecError::EmptyVector));
}

#[test]
fn test_remove_last_destroys_in_place() {
    let mut stack = GrowVec::new();
    stack.push(String::from("keep"));
    stack.push(String::from("drop"));

    assert_eq!(stack.remove_last(), Ok(()));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack[0], "keep");

    assert_eq!(stack.remove_last(), Ok(()));
    assert_eq!(stack.remove_last(), Err(GrowVecError::EmptyVector));
}

#[test]
fn test_pop_does_not_shrink() {
    let mut stack = GrowVec::new();
    for i in 0..4 {
        stack.push(i);
    }
    let capacity = stack.capacity();

    while stack.pop().is_some() {}

    assert_eq!(stack.capacity(), capacity);
}

#[test]
fn test_push_cloned_copies_value() {
    let original = String::from("shared");
    let mut stack = GrowVec::new();

    stack.push_cloned(&original);
    stack.push_cloned(&original);

    assert_eq!(stack.len(), 2);
    assert_eq!(stack[1], original);
    assert_eq!(original, "shared");
}

#[test]
fn test_mixed_stack_and_index_operations() {
    let mut stack = GrowVec::new();
    stack.push(1);
    stack.push(2);
    stack[0] = 10;
    stack.push(3);

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.last(), Some(&2));
    assert_eq!(stack[0], 10);
}
