//! A module containing [`Array`], a fixed size collection with inline storage.
//!
//! Owned iteration uses [`std::array::IntoIter`], while [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;

pub use array::*;
