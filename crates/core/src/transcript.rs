//! Transcript state and its transitions.
//!
//! [`Transcript`] is a plain value: every operation is a synchronous
//! transition, and the asynchronous part (actually resolving an answer)
//! is left to the caller, who receives a [`PendingRequest`] ticket on
//! submission and hands it back once the resolver settles.

use std::fmt::{self, Debug};
use std::sync::Arc;

use brandsetu_chat_resolver::Resolution;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock, format_timestamp};

/// Reply appended when the resolver fails for whatever reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, something went wrong. Please try again.";

/// Reply appended when the resolver succeeds without a reply.
pub const NOT_UNDERSTOOD_REPLY: &str = "Sorry, I didn’t understand that.";

/// The stock greeting.
pub const DEFAULT_WELCOME: &str = "Hey there! 👋 Welcome to Brandsetu Digital!\n\nI'm here to help you with any questions about our services, pricing, or how we can help grow your brand.\n\nWhat would you like to know?";

/// A message in the transcript. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: String,
    text: String,
    is_user: bool,
    timestamp: String,
}

impl Message {
    /// Opaque id, unique within the transcript.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The message text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the visitor wrote this message.
    #[inline]
    pub fn is_user(&self) -> bool {
        self.is_user
    }

    /// Display timestamp, e.g. `3:07 PM`.
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// A ticket for a resolution in flight.
///
/// It remembers which generation of the transcript it belongs to, so an
/// answer arriving after a [`Transcript::reset`] can be told apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PendingRequest {
    generation: u64,
    text: String,
}

impl PendingRequest {
    /// The trimmed text to resolve.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A copy of the observable transcript state, handed to presentation
/// layers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSnapshot {
    /// Messages in insertion order.
    pub messages: Vec<Message>,
    /// Whether the agent is "typing".
    pub awaiting: bool,
    /// Clickable suggestions, in display order.
    pub suggestions: Vec<String>,
}

/// The chat transcript.
///
/// It always holds at least the welcome message. While a resolution is in
/// flight the transcript is *awaiting*, and further submissions are
/// rejected.
pub struct Transcript {
    messages: Vec<Message>,
    awaiting: bool,
    suggestions: Vec<String>,
    generation: u64,
    next_id: u64,
    welcome: String,
    clock: Arc<dyn Clock>,
}

impl Transcript {
    /// Creates a transcript greeting the visitor with `welcome` and
    /// offering `opening_suggestions`.
    pub fn new<S: Into<String>>(
        welcome: S,
        opening_suggestions: Vec<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut transcript = Self {
            messages: vec![],
            awaiting: false,
            suggestions: opening_suggestions,
            generation: 0,
            next_id: 0,
            welcome: welcome.into(),
            clock,
        };
        transcript.push_welcome();
        transcript
    }

    /// Messages in insertion order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current suggestions.
    #[inline]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether a resolution is in flight.
    #[inline]
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Number of messages. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Copies the observable state.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            messages: self.messages.clone(),
            awaiting: self.awaiting,
            suggestions: self.suggestions.clone(),
        }
    }

    /// Appends a user message and enters the awaiting state.
    ///
    /// Returns `None` without touching anything if `text` is blank or a
    /// resolution is already in flight. Otherwise returns the ticket to
    /// resolve, carrying the trimmed text.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        let text = text.trim();
        if text.is_empty() || self.awaiting {
            return None;
        }
        self.push_message(text.to_owned(), true);
        self.awaiting = true;
        self.suggestions.clear();
        Some(PendingRequest {
            generation: self.generation,
            text: text.to_owned(),
        })
    }

    /// Same as [`Transcript::submit`].
    #[inline]
    pub fn select_suggestion(&mut self, text: &str) -> Option<PendingRequest> {
        self.submit(text)
    }

    /// Records a successful resolution.
    ///
    /// Returns `false` if the ticket is stale and the answer was dropped.
    pub fn on_resolved(
        &mut self,
        request: &PendingRequest,
        resolution: Resolution,
    ) -> bool {
        if !self.accepts(request) {
            return false;
        }
        let reply = resolution
            .reply
            .unwrap_or_else(|| NOT_UNDERSTOOD_REPLY.to_owned());
        self.push_message(reply, false);
        if !resolution.suggestions.is_empty() {
            self.suggestions = resolution.suggestions;
        }
        self.awaiting = false;
        true
    }

    /// Records a failed resolution by appending [`FALLBACK_REPLY`].
    ///
    /// Returns `false` if the ticket is stale and nothing changed.
    pub fn on_failed(&mut self, request: &PendingRequest) -> bool {
        if !self.accepts(request) {
            return false;
        }
        self.push_message(FALLBACK_REPLY.to_owned(), false);
        self.awaiting = false;
        true
    }

    /// Starts over with a fresh welcome message.
    ///
    /// Any resolution still in flight becomes stale.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.suggestions.clear();
        self.awaiting = false;
        self.generation += 1;
        self.push_welcome();
    }

    #[inline]
    fn accepts(&self, request: &PendingRequest) -> bool {
        request.generation == self.generation && self.awaiting
    }

    fn push_welcome(&mut self) {
        let welcome = self.welcome.clone();
        self.push_message(welcome, false);
    }

    fn push_message(&mut self, text: String, is_user: bool) {
        let id = format!("msg:{}", self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            text,
            is_user,
            timestamp: format_timestamp(&self.clock.now()),
        });
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME, vec![], Arc::new(SystemClock))
    }
}

impl Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("messages", &self.messages)
            .field("awaiting", &self.awaiting)
            .field("suggestions", &self.suggestions)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
