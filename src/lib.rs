//! A small library of general-purpose containers, written from the ground up rather than built on
//! top of [`std`]'s own collections.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): A growable, heap allocated array. This is the
//!   core of the crate and the only type that manages its own memory.
//! - [`Array`](collections::contiguous::Array): A fixed size array stored inline.
//! - [`LinkedList`](collections::linked::LinkedList): A doubly linked list.
//! - [`Stack`](collections::adaptor::Stack) and [`Queue`](collections::adaptor::Queue): Restricted
//!   interfaces built on top of a LinkedList.
//!
//! # Error Handling
//! It is more ergonomic for most methods to panic in exceptional cases, because users don't want to
//! be forced to handle an error every time they invoke a method. Imagine having to handle the
//! possibility of a capacity overflow every time you push into a Vector. For this reason, fallible
//! operations come in pairs: `try_push` returns a [`Result`], and `push` panics with the message of
//! the error that `try_push` would have returned.
//!
//! The errors themselves are strongly typed. Each is a small struct that implements
//! [`Error`](std::error::Error), and methods that can fail in more than one way return an enum of
//! the possible errors, see [`error`].
//!
//! Operations that can only fail because something is absent, such as popping from an empty
//! collection, return an [`Option`] instead.
//!
//! # Dependencies
//! This library doesn't use [`Vec`] to write [`Vector`](collections::contiguous::Vector) or
//! anything else. It depends on some derive macros because they remove the need for some very
//! repetitive programming, and optionally on `log` to trace allocations.
//!
//! # Features
//! Each family of collections sits behind a feature of the same name (`contiguous`, `linked` and
//! `adaptor`), all enabled by default through `collections-all`. The `log` feature emits trace
//! records whenever a Vector allocates, reallocates or frees its buffer.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod error;

pub(crate) mod util;
