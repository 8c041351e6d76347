use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::buffer::Buffer;
use crate::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, storing its elements in a single heap allocation.
///
/// Unlike [`Vec`], the capacity of a Vector is always exactly the value requested: `with_cap(5)`
/// has a capacity of 5 and `reserve(12)` results in a capacity of 12. When a push finds the Vector
/// full, the capacity doubles (or becomes 1 for an empty Vector).
///
/// Any operation that reallocates moves the elements, so slices and raw pointers obtained before
/// it are invalidated. For safe code, the borrow checker already enforces this.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items moved in from another Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `swap_with` | `O(1)` |
/// | `append` | `O(n+m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector without allocating. The first allocation happens once the capacity
    /// is raised, either explicitly or by a push.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector with room for exactly `cap` elements, so that the first `cap`
    /// pushes never reallocate.
    ///
    /// # Panics
    /// Panics if `cap` is greater than [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::try_with_cap(cap).throw()
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, returning an
    /// [`Err`] rather than panicking if the capacity can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, CapacityOverflow> {
        Ok(Vector {
            buf: Buffer::with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let vec = vector![1_u8, 2, 3];
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push('x');
    /// assert!(!vec.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current buffer can hold. This is always exactly the last
    /// capacity requested, never rounded up.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the maximum number of elements that a Vector of `T` could ever hold. For zero-sized
    /// types, this is [`usize::MAX`].
    pub const fn max_len() -> usize {
        Buffer::<T>::max_cap()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` isn't less than the
    /// length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// # use standard_containers::error::IndexOutOfBounds;
    /// let vec = vector!['a', 'b'];
    /// assert_eq!(vec.at(1), Ok(&'b'));
    /// assert_eq!(vec.at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has been checked to be within the initialized range.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` isn't less
    /// than the length of the Vector.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has been checked to be within the initialized range.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Calling this method with an out of bounds
    /// index is undefined behavior, even if the resulting reference is never used. Use
    /// [`at`](Vector::at) for a checked alternative.
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index < len, so the pointer is in bounds and the
        // value initialized. The borrow on self prevents mutation for the returned lifetime.
        unsafe { self.buf.ptr().add(index).as_ref() }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). See [`get_unchecked`](Vector::get_unchecked).
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index < len. The mutable borrow on self makes the
        // returned reference unique.
        unsafe { self.buf.ptr().add(index).as_mut() }
    }

    /// Returns a reference to the first element, or [`None`] if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, or [`None`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, or [`None`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let vec = vector![1, 2, 3];
    /// assert_eq!(vec.front(), Some(&1));
    /// assert_eq!(vec.back(), Some(&3));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, or [`None`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Returns a raw pointer to the Vector's buffer. The pointer is dangling if the capacity is 0
    /// and is invalidated by any reallocation.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr().cast_const()
    }

    /// Returns a raw mutable pointer to the Vector's buffer. The pointer is dangling if the
    /// capacity is 0 and is invalidated by any reallocation.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a slice over all initialized elements.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        // The borrow checker enforces that self isn't mutated due to this function taking a &self.
        // The total size is < isize::MAX as the result of being a valid Vector.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Returns a mutable slice over all initialized elements.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, with the mutable borrow on self making the slice unique.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`. If the current capacity is
    /// smaller, the Vector is reallocated with a capacity of exactly `new_cap`, otherwise this is a
    /// no-op and the buffer isn't touched.
    ///
    /// Note that this differs from [`Vec::reserve`], which takes a number of additional elements.
    ///
    /// # Panics
    /// Panics if `new_cap` is greater than [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut vec = vector![1, 2];
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).throw()
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`, returning an [`Err`] rather
    /// than panicking if `new_cap` is greater than [`max_len`](Vector::max_len). The Vector is left
    /// unchanged when an error is returned.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        if new_cap <= self.cap() { return Ok(()); }

        if new_cap > Self::max_len() {
            return Err(CapacityOverflow);
        }

        // SAFETY: len <= cap < new_cap and all values < len are initialized.
        unsafe { self.buf.realloc(self.len, new_cap) }
    }

    /// Shrinks the Vector so that its capacity is equal to its length. Does nothing if they are
    /// already equal.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(8);
    /// vec.push('a');
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.cap() { return; }

        // SAFETY: len <= cap and all values < len are initialized. There are no values beyond len.
        let result = unsafe { self.buf.realloc(self.len, self.len) };
        // A layout that is no larger than the current one is always valid.
        debug_assert!(result.is_ok());
    }

    /// Drops all elements past `len`. Has no effect if the Vector is already no longer than `len`.
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            // Decrement len before dropping, so that a panicking drop can't cause a double drop.
            self.len -= 1;

            // SAFETY: The value at the old len - 1 is initialized and is no longer considered part
            // of the Vector, so it will never be accessed again.
            unsafe { ptr::drop_in_place(self.buf.ptr().add(self.len).as_ptr()) }
        }
    }

    /// Drops all elements in the Vector, setting its length to 0. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut vec = vector![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the Vector is full and its capacity can't grow without exceeding
    /// [`max_len`](Vector::max_len).
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Push the provided value onto the end of the Vector, returning an [`Err`] rather than
    /// panicking if the Vector can't grow. The value is dropped in that case.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityOverflow> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1_u8..=3 {
    ///     // SAFETY: We know that vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.ptr().add(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut vec = vector![0, 1, 2, 3, 4];
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector.
            // All values < the old len are initialized. We are making a bitwise copy of the value
            // and then forgetting that the slot holds it, which moves the value out of the buffer.
            Some(unsafe { self.buf.ptr().add(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, moving all following values one slot to the
    /// right and growing first if the Vector is full. An `index` equal to the length appends.
    ///
    /// Returns a reference to the inserted value, which is valid for the buffer after any
    /// reallocation.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the Vector, or if the Vector needs to grow
    /// and can't.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut vec = vector![0, 1, 2];
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// *vec.insert(3, 300) += 1;
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 301, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking.
    /// The Vector is left unchanged when an error is returned.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOrCapOverflow> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        // The Vector needs room for len + 1 elements after the insertion.
        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: index <= len < cap, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) are within the allocation. ptr::copy handles the overlap. The
        // slot at index is then overwritten without dropping, as its value has been moved.
        unsafe {
            let slot = self.buf.ptr().add(index);
            slot.add(1).copy_from(slot, self.len - index);
            slot.write(value);
        }

        self.len += 1;

        // SAFETY: index < len and the value at index has just been initialized.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if
    /// the index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value at index is initialized and is read out exactly once.
        // The range [index + 1, len) is then moved down over it, leaving the final slot unused.
        let value = unsafe {
            let slot = self.buf.ptr().add(index);
            let value = slot.read();
            slot.copy_from(slot.add(1), self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Exchanges the contents of two Vectors, including their buffers and capacities, without
    /// moving any elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut a = vector![1, 2, 3];
    /// let mut b = vector![4];
    /// a.swap_with(&mut b);
    /// assert_eq!(&*a, &[4]);
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents of the Vector out into a new one, leaving self empty with no allocation.
    /// No elements are copied or moved, only ownership of the buffer is transferred.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::vector;
    /// let mut a = vector![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::take(self)
    }

    /// Moves all elements from `other` to the end of self, leaving `other` empty. The capacity of
    /// `other` is unchanged. If self needs to grow, it grows the same way as [`push`](Vector::push)
    /// does, or to exactly the combined length if doubling isn't enough.
    ///
    /// # Panics
    /// Panics if the combined length exceeds [`max_len`](Vector::max_len).
    pub fn append(&mut self, other: &mut Vector<T>) {
        let new_len = self.len.checked_add(other.len).ok_or(CapacityOverflow).throw();
        self.try_grow_to(new_len).throw();

        // SAFETY: self is valid for writes from len to new_len and other is valid for reads from 0
        // to other.len. Both are properly aligned and don't overlap, as they are separate
        // allocations. The values in other are forgotten by setting its length to 0.
        unsafe {
            self.buf.ptr().add(self.len).copy_from_nonoverlapping(other.buf.ptr(), other.len);
        }

        self.len = new_len;
        other.len = 0;
    }

    /// Grows the buffer to allow for the insertion of at least one additional element, doubling
    /// the capacity or setting it to [`MIN_CAP`] if it was empty.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the Vector is already at [`max_len`](Vector::max_len).
    pub(crate) fn try_grow(&mut self) -> Result<(), CapacityOverflow> {
        let min_cap = self.len.checked_add(1).ok_or(CapacityOverflow)?;
        self.try_grow_to(min_cap)
    }

    /// Grows the buffer so that it can hold at least `min_cap` elements, doubling the capacity (or
    /// setting it to [`MIN_CAP`]) unless `min_cap` is larger still. Does nothing if the capacity is
    /// already sufficient.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if `min_cap` is greater than [`max_len`](Vector::max_len).
    pub(crate) fn try_grow_to(&mut self, min_cap: usize) -> Result<(), CapacityOverflow> {
        if min_cap <= self.cap() { return Ok(()); }

        // If doubling would pass the maximum capacity, use the maximum instead.
        let doubled = cmp::max(
            cmp::min(self.cap().saturating_mul(GROWTH_FACTOR), Self::max_len()),
            MIN_CAP,
        );

        self.try_reserve(cmp::max(doubled, min_cap))
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector with `len` default values and a capacity of exactly `len`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_len(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);

        for _ in 0..len {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(T::default()); }
        }

        vec
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector containing `count` clones of `value`, with a capacity of exactly `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat(value: T, count: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(count);

        if count > 0 {
            for _ in 1..count {
                // SAFETY: vec has been created with the right capacity.
                unsafe { vec.push_unchecked(value.clone()); }
            }
            // SAFETY: The last slot is filled with the original value.
            unsafe { vec.push_unchecked(value); }
        }

        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.try_grow_to(self.len.saturating_add(lower)).throw();

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        self.clear();

        // Implicitly drop self.buf, which deallocates the owned memory without touching values.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Creates an independent copy of the Vector, with the same capacity as the original.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
