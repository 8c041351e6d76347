//! Linked collection types. Currently this is only [`LinkedList`], which also backs the
//! [`adaptor`](crate::collections::adaptor) types.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
