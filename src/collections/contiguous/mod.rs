//! Collections that store their elements in a single contiguous block of memory.

pub mod array;
pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
