use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::linked::LinkedList;

/// A first-in first-out collection. Elements are pushed at the back and popped from the front.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `swap_with` | `O(1)` |
///
/// # Examples
/// ```
/// # use standard_containers::collections::adaptor::Queue;
/// let mut queue = Queue::from([1, 2]);
/// queue.push(3);
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&3));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), None);
/// ```
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the element at the front of the Queue and returns it, or [`None`] if the Queue is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the oldest element, the one that [`pop`](Queue::pop) would return
    /// next.
    pub const fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a mutable reference to the oldest element, if the Queue isn't empty.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Returns a reference to the most recently pushed element.
    pub const fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a mutable reference to the most recently pushed element.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Exchanges the contents of two Queues in `O(1)`.
    pub fn swap_with(&mut self, other: &mut Queue<T>) {
        self.list.swap_with(&mut other.list);
    }

    /// Moves all elements into a new Queue, leaving this one empty.
    pub fn take(&mut self) -> Queue<T> {
        mem::take(self)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: LinkedList::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front", &self.front())
            .field("back", &self.back())
            .field("len", &self.len())
            .finish()
    }
}
