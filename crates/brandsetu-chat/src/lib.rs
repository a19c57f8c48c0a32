//! An out-of-the-box Brandsetu Digital chat widget.
//!
//! The crate includes a terminal front end for trying the widget out. And
//! you can also use it as a library to drive the widget from your own
//! presentation layer.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

pub mod render;
mod session;

pub use session::{ChatSession, ChatSessionBuilder};

/// Re-exports of [`brandsetu_chat_core`] crate.
pub mod core {
    pub use brandsetu_chat_core::*;
}

/// Re-exports of the resolver crates.
pub mod resolvers {
    pub use brandsetu_chat_local_resolver as local;
    pub use brandsetu_chat_remote_resolver as remote;
    pub use brandsetu_chat_resolver::*;
}
