use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, LinkedList, ListContents, ListState, NodeRef};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // Holding the list and popping from either end avoids duplicating any unlinking logic.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

/// The two ends of the range of nodes that an iterator is yet to yield, along with the number of
/// nodes between them. A cursor never relinks nodes, it only walks the links.
struct Cursor<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
}

impl<T> Cursor<T> {
    fn new(state: &ListState<T>) -> Cursor<T> {
        match state {
            ListState::Empty => Cursor {
                front: None,
                back: None,
                len: 0,
            },
            ListState::Full(ListContents { len, head, tail }) => Cursor {
                front: Some(*head),
                back: Some(*tail),
                len: len.get(),
            },
        }
    }

    fn next_front(&mut self) -> Option<NodeRef<T>> {
        if self.len == 0 {
            return None;
        }

        let node = self.front?;
        self.len -= 1;
        // SAFETY: len was non-zero, so node is still part of the list that this cursor borrows.
        // Only the link is read, never the value that may already be borrowed.
        self.front = unsafe { node.next() };
        Some(node)
    }

    fn next_back(&mut self) -> Option<NodeRef<T>> {
        if self.len == 0 {
            return None;
        }

        let node = self.back?;
        self.len -= 1;
        // SAFETY: As in next_front.
        self.back = unsafe { node.prev() };
        Some(node)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            cursor: Cursor::new(&self.state),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the elements of a [`LinkedList`], from front to back.
pub struct Iter<'a, T> {
    cursor: Cursor<T>,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The list is immutably borrowed for 'a, so the node lives at least that long.
        self.cursor.next_front().map(|node| unsafe { node.value() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: The list is immutably borrowed for 'a, so the node lives at least that long.
        self.cursor.next_back().map(|node| unsafe { node.value() })
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.cursor.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// SAFETY: Iter only hands out shared references, so it behaves like &T.
unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
// SAFETY: As above.
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            cursor: Cursor::new(&self.state),
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowing iterator over the elements of a [`LinkedList`], from front to back.
pub struct IterMut<'a, T> {
    cursor: Cursor<T>,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The list is mutably borrowed for 'a and each node is yielded at most once, as the
        // cursor's len stops the two ends from crossing.
        self.cursor.next_front().map(|node| unsafe { node.value_mut() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        // SAFETY: As in next, each node is yielded at most once.
        self.cursor.next_back().map(|node| unsafe { node.value_mut() })
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.cursor.len
    }
}

// SAFETY: IterMut behaves like &mut T.
unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
// SAFETY: As above.
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}
