use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::linked::LinkedList;

/// A last-in first-out collection. Elements are pushed onto and popped from the top only.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `swap_with` | `O(1)` |
///
/// # Examples
/// ```
/// # use standard_containers::collections::adaptor::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the top element and returns it, or [`None`] if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns a reference to the top element, the one that [`pop`](Stack::pop) would return next.
    pub const fn top(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a mutable reference to the top element, if the Stack isn't empty.
    pub const fn top_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Exchanges the contents of two Stacks in `O(1)`.
    pub fn swap_with(&mut self, other: &mut Stack<T>) {
        self.list.swap_with(&mut other.list);
    }

    /// Moves all elements into a new Stack, leaving this one empty.
    pub fn take(&mut self) -> Stack<T> {
        mem::take(self)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

/// Elements are pushed in iteration order, so the last one yielded ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: LinkedList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.top())
            .field("len", &self.len())
            .finish()
    }
}
