//! The answer resolution capability of the chat widget.
//!
//! This crate establishes a single protocol for the transcript controller
//! to turn raw user text into a reply, so that the widget can switch
//! between a local keyword table and a remote endpoint without touching
//! the controller.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod resolution;
mod resolver;

pub use error::*;
pub use resolution::*;
pub use resolver::*;
