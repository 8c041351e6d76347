use std::array;
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::Vector;
use crate::error::IndexOutOfBounds;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A fixed size contiguous collection of exactly `N` elements, stored inline rather than on the
/// heap. The counterpart to [`Vector`] for collections that never change in size.
///
/// Because an Array never reallocates, references to its elements stay valid for as long as the
/// Array itself is borrowed.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is equal to `N`.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `size` | `O(1)` |
/// | `fill` | `O(n)` |
/// | `swap_with` | `O(n)` |
/// | `take` | `O(n)` |
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T, const N: usize> {
    pub(crate) arr: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Creates an Array by calling `f` with each index in order.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Array;
    /// let arr: Array<usize, 4> = Array::from_fn(|i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Array<T, N> {
        Array {
            arr: array::from_fn(f),
        }
    }

    /// Returns the size of the Array, which is always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the length of the Array, which is always `N`. Identical to
    /// [`size`](Array::size).
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if `N` is 0.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the maximum number of elements an Array of `T` could hold, matching
    /// [`Vector::max_len`].
    pub const fn max_len() -> usize {
        Vector::<T>::max_len()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` isn't less than `N`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Array;
    /// # use standard_containers::error::IndexOutOfBounds;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.at(0), Ok(&1));
    /// assert_eq!(arr.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub const fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index < N {
            Ok(&self.arr[index])
        } else {
            Err(IndexOutOfBounds { index, len: N })
        }
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` isn't less
    /// than `N`.
    pub const fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index < N {
            Ok(&mut self.arr[index])
        } else {
            Err(IndexOutOfBounds { index, len: N })
        }
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Calling this method with an out of bounds index is undefined
    /// behavior. Use [`at`](Array::at) for a checked alternative.
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index < N.
        unsafe { &*self.arr.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index < N.
        unsafe { &mut *self.arr.as_mut_ptr().add(index) }
    }

    /// Returns a reference to the first element, or [`None`] if `N` is 0.
    pub const fn front(&self) -> Option<&T> {
        self.arr.first()
    }

    /// Returns a mutable reference to the first element, or [`None`] if `N` is 0.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        self.arr.first_mut()
    }

    /// Returns a reference to the last element, or [`None`] if `N` is 0.
    pub const fn back(&self) -> Option<&T> {
        self.arr.last()
    }

    /// Returns a mutable reference to the last element, or [`None`] if `N` is 0.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        self.arr.last_mut()
    }

    /// Returns a raw pointer to the Array's inline storage.
    pub const fn as_ptr(&self) -> *const T {
        self.arr.as_ptr()
    }

    /// Returns a raw mutable pointer to the Array's inline storage.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.arr.as_mut_ptr()
    }

    /// Returns a slice over all elements.
    pub const fn as_slice(&self) -> &[T] {
        &self.arr
    }

    /// Returns a mutable slice over all elements.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.arr
    }

    /// Exchanges the elements of two Arrays, one pair at a time. Unlike
    /// [`Vector::swap_with`], this is `O(N)` because the storage is inline.
    pub fn swap_with(&mut self, other: &mut Array<T, N>) {
        self.arr.swap_with_slice(&mut other.arr);
    }

    /// Consumes the Array, returning the underlying primitive array.
    pub fn into_inner(self) -> [T; N] {
        self.arr
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Overwrites every element of the Array with a clone of `value`.
    ///
    /// # Panics
    /// Panics if `N` is 0, as there is nothing to fill.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Array;
    /// let mut arr = Array::from([1, 2, 3]);
    /// arr.fill(7);
    /// assert_eq!(&*arr, &[7, 7, 7]);
    /// ```
    pub fn fill(&mut self, value: T) {
        self.try_fill(value).throw()
    }

    /// Overwrites every element of the Array with a clone of `value`, returning an [`Err`] rather
    /// than panicking if the Array has no elements.
    pub fn try_fill(&mut self, value: T) -> Result<(), IndexOutOfBounds> {
        if N == 0 {
            return Err(IndexOutOfBounds { index: 0, len: 0 });
        }

        self.arr.fill(value);
        Ok(())
    }
}

impl<T: Default, const N: usize> Array<T, N> {
    /// Creates an Array with every element set to the default value of `T`.
    pub fn new() -> Array<T, N> {
        Array::from_fn(|_| T::default())
    }

    /// Moves every element out into a new Array, leaving the default value of `T` behind in each
    /// slot. The inline storage itself can't be handed over, so the elements are relocated one by
    /// one.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Array;
    /// let mut source = Array::from([String::from("a"), String::from("b")]);
    /// let dest = source.take();
    /// assert_eq!(&*dest, &["a", "b"]);
    /// assert_eq!(&*source, &["", ""]);
    /// ```
    pub fn take(&mut self) -> Array<T, N> {
        mem::take(self)
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(value: [T; N]) -> Self {
        Array { arr: value }
    }
}

impl<T, const N: usize> From<Array<T, N>> for Vector<T> {
    fn from(value: Array<T, N>) -> Self {
        Vector::from(value.arr)
    }
}

impl<T, const N: usize> TryFrom<Vector<T>> for Array<T, N> {
    type Error = Vector<T>;

    /// Moves the elements of a Vector into an Array, returning the Vector unchanged as the error if
    /// its length isn't exactly `N`.
    fn try_from(value: Vector<T>) -> Result<Self, Self::Error> {
        if value.len() != N {
            return Err(value);
        }

        let mut iter = value.into_iter();
        // SAFETY: The iterator yields exactly N values, one for each call.
        Ok(Array::from_fn(|_| unsafe { iter.next().unreachable() }))
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.arr
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.arr
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.arr
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.arr
    }
}

impl<T, const N: usize> Borrow<[T]> for Array<T, N> {
    fn borrow(&self) -> &[T] {
        &self.arr
    }
}

impl<T, const N: usize> BorrowMut<[T]> for Array<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.arr
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.arr == *other
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;

    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.arr.iter_mut()
    }
}

impl<T: Debug, const N: usize> Debug for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.arr)
            .field("size", &N)
            .finish()
    }
}

impl<T: Debug, const N: usize> Display for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.arr.iter()).finish()
    }
}
