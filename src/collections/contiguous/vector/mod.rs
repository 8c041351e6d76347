//! A module containing [`Vector`] and associtated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a Vector.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module, and can be built from a literal list of
//! values with the [`vector!`](crate::vector) macro.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;

/// Creates a [`Vector`] containing the arguments, in the same manner as [`vec!`].
///
/// - `vector![]` creates an empty Vector.
/// - `vector![a, b, c]` creates a Vector containing the listed values, with a capacity equal to
///   their count.
/// - `vector![value; count]` creates a Vector containing `count` clones of `value`.
///
/// # Examples
/// ```
/// # use standard_containers::vector;
/// # use standard_containers::collections::contiguous::Vector;
/// let empty: Vector<u8> = vector![];
/// assert!(empty.is_empty());
///
/// let listed = vector![1, 2, 3, 4];
/// assert_eq!(&*listed, &[1, 2, 3, 4]);
/// assert_eq!(listed.cap(), 4);
///
/// let repeated = vector!["ab"; 3];
/// assert_eq!(&*repeated, &["ab", "ab", "ab"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Vector::repeat($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($value),+])
    };
}
