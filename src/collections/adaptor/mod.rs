//! Restricted views over a [`LinkedList`](crate::collections::linked::LinkedList), exposing only
//! the operations of a last-in first-out [`Stack`] or a first-in first-out [`Queue`].
//!
//! Neither type supports iteration or indexing. Elements can only be observed at the end(s) that
//! the discipline allows.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
