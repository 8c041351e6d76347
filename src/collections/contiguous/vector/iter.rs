use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::buffer::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take ownership of the buffer and leave self empty, so that dropping it is a no-op.
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::take(&mut self.buf),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// The iterator owns the Vector's buffer; values in `start..end` are still initialized and are
/// dropped along with the buffer if the iterator isn't exhausted.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining values as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and within the allocation.
        unsafe {
            slice::from_raw_parts(self.buf.ptr().add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values in start..end haven't been yielded and are still initialized. The
            // buffer itself is dropped afterwards, which only deallocates.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(i).as_ptr()) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized. Incrementing start afterwards means
            // the value is effectively moved out of the buffer.
            let value = unsafe { self.buf.ptr().add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is still >= start, so the value is initialized and
            // will never be read again.
            Some(unsafe { self.buf.ptr().add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
