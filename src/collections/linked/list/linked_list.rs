use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
use crate::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Every node is a separate heap allocation owned by the list. The links between nodes are
/// non-owning pointers, and nodes are only freed by the list itself, when popped, cleared or
/// dropped.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `swap_with` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(n)` operations will consist
/// primarily of cache misses. For this reason,
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred unless the `O(1)`
/// operations at both ends are what is needed.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            // SAFETY: head is live while the list is Full, and the list is borrowed for the
            // lifetime of the returned reference.
            Full(ListContents { head, .. }) => Some(unsafe { head.value() }),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            // SAFETY: head is live while the list is Full, and the list is mutably borrowed for
            // the lifetime of the returned reference.
            Full(ListContents { head, .. }) => Some(unsafe { head.value_mut() }),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            // SAFETY: As for front, with tail.
            Full(ListContents { tail, .. }) => Some(unsafe { tail.value() }),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            // SAFETY: As for front_mut, with tail.
            Full(ListContents { tail, .. }) => Some(unsafe { tail.value_mut() }),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let Full(contents) = &mut self.state else { return None };

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                let old_head = contents.head;

                // SAFETY: Previous length is greater than 1, so the first element is followed by
                // at least one more. Both nodes are live and the list is mutably borrowed. Once
                // the new head's back link is cleared, nothing links to the old head, so it is
                // freed exactly once.
                unsafe {
                    let new_head = old_head.next().unreachable();
                    new_head.set_prev(None);
                    contents.head = new_head;
                    contents.len = new_len;

                    Some(old_head.free())
                }
            },
            // SAFETY: The only node has been taken out of the list along with its contents.
            None => self.state.take_contents().map(|contents| unsafe { contents.head.free() }),
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let Full(contents) = &mut self.state else { return None };

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                let old_tail = contents.tail;

                // SAFETY: Previous length is greater than 1, so the last element is preceded by at
                // least one more. As in pop_front, the old tail is unlinked before it is freed.
                unsafe {
                    let new_tail = old_tail.prev().unreachable();
                    new_tail.set_next(None);
                    contents.tail = new_tail;
                    contents.len = new_len;

                    Some(old_tail.free())
                }
            },
            // SAFETY: The only node has been taken out of the list along with its contents.
            None => self.state.take_contents().map(|contents| unsafe { contents.head.free() }),
        }
    }

    /// Exchanges the contents of two lists in `O(1)`, without touching any nodes.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut a = LinkedList::from([1, 2, 3]);
    /// let mut b = LinkedList::new();
    /// a.swap_with(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 3);
    /// ```
    pub fn swap_with(&mut self, other: &mut LinkedList<T>) {
        mem::swap(&mut self.state, &mut other.state);
    }

    /// Removes and drops every element in the list.
    pub fn clear(&mut self) {
        let mut link = self.state.take_contents().map(|contents| contents.head);

        while let Some(node) = link {
            // SAFETY: The contents have been taken, so every node is reachable only by this walk,
            // which reads each node's next link before freeing it.
            unsafe {
                link = node.next();
                drop(node.free());
            }
        }
    }

    /// Returns an iterator over references to each element, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to each element, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    /// Walks the whole chain, asserting that every back link mirrors the forward link it pairs
    /// with and that the stored tail and length match the chain.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut curr = *head;
                let mut count = 1;

                // SAFETY: Every node reachable from head is live while the list is borrowed.
                unsafe {
                    assert_eq!(curr.prev(), None);

                    while let Some(next) = curr.next() {
                        assert_eq!(next.prev(), Some(curr));
                        curr = next;
                        count += 1;
                    }
                }

                assert_eq!(*tail, curr);
                assert_eq!(len.get(), count);
            },
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    /// Takes the contents out of self, leaving it [`Empty`].
    pub fn take_contents(&mut self) -> Option<ListContents<T>> {
        match mem::replace(self, Empty) {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }
}

impl<T> ListContents<T> {
    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::alloc(value, None, None);

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::alloc(value, None, Some(self.head));
        // SAFETY: head is live and self is mutably borrowed, so its links aren't borrowed anywhere.
        unsafe { self.head.set_prev(Some(node)); }
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::alloc(value, Some(self.tail), None);
        // SAFETY: tail is live and self is mutably borrowed, so its links aren't borrowed anywhere.
        unsafe { self.tail.set_next(Some(node)); }
        self.tail = node;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Creates a deep copy of the list, with newly allocated nodes.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);

        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

// SAFETY: LinkedList uniquely owns all of its nodes and the links never escape the list, so it can
// be sent to another thread whenever T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that LinkedList<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
