//! Error types shared by the collections in this crate.
//!
//! There are only two ways for a container operation to fail recoverably: an index that lies
//! outside of the live elements ([`IndexOutOfBounds`]) or a capacity request that can't be
//! represented in memory ([`CapacityOverflow`]). Operations that can produce either return
//! [`IndexOrCapOverflow`].
#![warn(missing_docs)]

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range of initialized elements in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested capacity exceeds the maximum number of elements that can be allocated for the
/// element type, (`isize::MAX` bytes) or an element count overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Either an [`IndexOutOfBounds`] or a [`CapacityOverflow`], for operations that check an index
/// and may need to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
