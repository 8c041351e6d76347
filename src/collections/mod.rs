//! Various general-purpose collection types.
//!
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides the slice API (indexing, sorting, searching, etc.) without rewriting it.

#[cfg(feature = "adaptor")]
pub mod adaptor;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
