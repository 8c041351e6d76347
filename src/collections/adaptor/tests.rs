#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, MoveOnly};

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::new();
    for i in 1..=3 {
        stack.push(i);
    }

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.top(), None, "An empty Stack has no top.");
}

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::new();
    for i in 1..=3 {
        queue.push(i);
    }

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&3));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
}

#[test]
fn test_from_literal() {
    let stack = Stack::from([1, 2, 3, 4]);
    assert_eq!(stack.top(), Some(&4), "The last literal element should end up on top.");
    assert_eq!(stack.len(), 4);

    let queue = Queue::from([1, 2, 3, 4]);
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&4));

    let collected: Stack<_> = "abc".chars().collect();
    assert_eq!(collected.top(), Some(&'c'));
}

#[test]
fn test_mutate_ends() {
    let mut stack = Stack::from([1, 2]);
    *stack.top_mut().unwrap() = 20;
    assert_eq!(stack.pop(), Some(20));
    assert_eq!(stack.pop(), Some(1));

    let mut queue = Queue::from([1, 2]);
    *queue.front_mut().unwrap() += 10;
    *queue.back_mut().unwrap() += 20;
    assert_eq!(queue.pop(), Some(11));
    assert_eq!(queue.pop(), Some(22));
}

#[test]
fn test_clone_is_independent() {
    let mut stack = Stack::from([1, 2, 3]);
    let copy = stack.clone();
    assert_eq!(stack, copy);

    stack.pop();
    stack.push(10);
    assert_ne!(stack, copy);
    assert_eq!(copy.top(), Some(&3));

    let mut queue = Queue::from([String::from("a")]);
    let copy = queue.clone();
    queue.front_mut().unwrap().push('!');
    assert_eq!(copy.front().map(String::as_str), Some("a"));
}

#[test]
fn test_move_and_take() {
    let mut stack = Stack::new();
    stack.push(MoveOnly(1));
    stack.push(MoveOnly(2));

    let mut moved = stack.take();
    assert!(stack.is_empty(), "The source should be left empty.");
    assert_eq!(moved.pop(), Some(MoveOnly(2)));

    let mut queue = Queue::from([MoveOnly(3)]);
    let mut moved = queue.take();
    assert_eq!(queue.pop(), None);
    assert_eq!(moved.pop(), Some(MoveOnly(3)));
}

#[test]
fn test_swap_with() {
    let mut a = Queue::from([1, 2]);
    let mut b = Queue::from([3]);
    a.swap_with(&mut b);
    assert_eq!(a.front(), Some(&3));
    assert_eq!(b.len(), 2);

    let mut a = Stack::from([1]);
    let mut b = Stack::new();
    a.swap_with(&mut b);
    assert!(a.is_empty());
    assert_eq!(b.top(), Some(&1));
}

#[test]
fn test_extend_and_drop() {
    let counter = CountedDrop::new(0);
    let mut queue = Queue::new();
    queue.extend([counter.clone(), counter.clone(), counter.clone()]);
    assert_eq!(queue.len(), 3);

    drop(queue.pop());
    assert_eq!(counter.get(), 1);
    drop(queue);
    assert_eq!(counter.get(), 3);
}

#[test]
fn test_formatting() {
    let stack = Stack::from([1, 2]);
    assert_eq!(format!("{stack:?}"), "Stack { top: Some(2), len: 2 }");

    let queue = Queue::from([1, 2]);
    assert_eq!(format!("{queue:?}"), "Queue { front: Some(1), back: Some(2), len: 2 }");
}

#[test]
fn test_interleaved_push_and_pop() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();

    for i in 0..12 {
        stack.push(i);
        queue.push(i);
        *stack.top_mut().unwrap() += 100;
        *queue.back_mut().unwrap() += 100;

        if i % 3 == 1 {
            assert_eq!(stack.pop(), Some(i + 100));
            assert!(queue.pop().is_some());
        }
    }

    assert_eq!(stack.len(), 8);
    assert_eq!(queue.len(), 8);
    assert_eq!(stack.top(), Some(&111));
    assert_eq!(queue.front(), Some(&104));
    assert_eq!(queue.back(), Some(&111));
}

proptest! {
    #[test]
    fn stack_pops_in_reverse(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut stack: Stack<_> = values.iter().copied().collect();

        for &value in values.iter().rev() {
            prop_assert_eq!(stack.pop(), Some(value));
        }
        prop_assert_eq!(stack.pop(), None);
    }

    #[test]
    fn queue_pops_in_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut queue: Queue<_> = values.iter().copied().collect();

        for &value in &values {
            prop_assert_eq!(queue.pop(), Some(value));
        }
        prop_assert_eq!(queue.pop(), None);
    }
}
