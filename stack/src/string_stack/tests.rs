use super::*;
use crate::{INITIAL_CAPACITY, MAX_CAPACITY};

fn push_all(stack: &mut StringStack, items: &[&str]) {
    for item in items {
        stack.push(item).unwrap();
    }
}

#[test]
fn abc() {
    let mut stack = StringStack::new();
    assert!(stack.is_empty());
    push_all(&mut stack, &["a", "b", "c"]);
    assert_eq!(stack.size(), 3);
    assert_eq!(stack.pop().unwrap(), "c");
    assert_eq!(stack.pop().unwrap(), "b");
    assert_eq!(stack.pop().unwrap(), "a");
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackError::StackEmpty));
}

#[test]
fn stores_a_copy() {
    let mut stack = StringStack::new();
    let mut source = String::from("hello");
    stack.push(&source).unwrap();
    source.push_str(" world");
    assert_eq!(stack.pop().unwrap(), "hello");
}

#[test]
fn accepts_the_longest_allowed_string() {
    let mut stack = StringStack::new();
    let item = "x".repeat(MAX_ELEMENT_BYTE_SIZE);
    stack.push(&item).unwrap();
    assert_eq!(stack.pop().unwrap(), item);
}

#[test]
fn rejects_oversized_string() {
    let mut stack = StringStack::new();
    push_all(&mut stack, &["a", "b"]);
    let item = "x".repeat(MAX_ELEMENT_BYTE_SIZE + 1);
    assert_eq!(
        stack.push(&item),
        Err(StackError::ElementTooLarge {
            len: MAX_ELEMENT_BYTE_SIZE + 1,
            max: MAX_ELEMENT_BYTE_SIZE,
        })
    );
    assert_eq!(stack.size(), 2);
    assert_eq!(stack.pop().unwrap(), "b");
}

#[test]
fn length_is_counted_in_bytes() {
    let mut stack = StringStack::new();
    // two bytes per char
    let item = "é".repeat(MAX_ELEMENT_BYTE_SIZE / 2 + 1);
    assert!(item.chars().count() <= MAX_ELEMENT_BYTE_SIZE);
    assert!(matches!(
        stack.push(&item),
        Err(StackError::ElementTooLarge { .. })
    ));
    assert!(stack.is_empty());
}

#[test]
fn oversized_push_may_still_grow() {
    let mut stack = StringStack::new();
    for i in 0..INITIAL_CAPACITY {
        stack.push(&i.to_string()).unwrap();
    }
    let item = "x".repeat(MAX_ELEMENT_BYTE_SIZE + 1);
    assert!(stack.push(&item).is_err());
    assert_eq!(stack.size(), INITIAL_CAPACITY);
    assert_eq!(stack.capacity(), INITIAL_CAPACITY * 2);
}

#[test]
fn full_stack_reports_full_before_size_check() {
    let mut stack = StringStack::new();
    for i in 0..MAX_CAPACITY {
        stack.push(&i.to_string()).unwrap();
    }
    assert!(stack.is_full());
    let item = "x".repeat(MAX_ELEMENT_BYTE_SIZE + 1);
    assert_eq!(stack.push(&item), Err(StackError::StackFull));
    assert_eq!(stack.push("y"), Err(StackError::StackFull));

    for i in (0..MAX_CAPACITY).rev() {
        assert_eq!(stack.pop().unwrap(), i.to_string());
    }
    assert!(stack.is_empty());
    assert_eq!(stack.capacity(), INITIAL_CAPACITY);
}

#[test]
fn empty_string() {
    let mut stack = StringStack::try_new().unwrap();
    stack.push("").unwrap();
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.pop().unwrap(), "");
}

#[test]
fn debug_output() {
    let mut stack = StringStack::default();
    push_all(&mut stack, &["a"]);
    assert_eq!(
        format!("{stack:?}"),
        "StringStack { size: 1, capacity: 16 }"
    );
}
