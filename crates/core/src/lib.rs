//! Core logic of the chat widget: the transcript, its transitions and the
//! event loop that sequences submissions and answers.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod clock;
mod error;
mod resolver_client;
pub mod transcript;
mod widget;

pub use error::WidgetClosedError;
pub use widget::{ChatWidget, ChatWidgetBuilder};
