use brandsetu_chat_core::transcript::TranscriptSnapshot;
use brandsetu_chat_core::{ChatWidget, ChatWidgetBuilder, WidgetClosedError};
use brandsetu_chat_local_resolver::LocalResolver;
use brandsetu_chat_remote_resolver::{RemoteConfig, RemoteResolver};
use brandsetu_chat_resolver::AnswerResolver;

/// A session builder.
///
/// See [`ChatSession`].
pub struct ChatSessionBuilder {
    widget_builder: ChatWidgetBuilder,
}

impl ChatSessionBuilder {
    /// Creates a session builder with a specified resolver.
    pub fn with_resolver<R: AnswerResolver + 'static>(resolver: R) -> Self {
        let widget_builder = ChatWidgetBuilder::with_resolver(resolver);
        Self { widget_builder }
    }

    /// Creates a session builder answering from the built-in table.
    #[inline]
    pub fn local() -> Self {
        Self::with_resolver(LocalResolver::brandsetu())
    }

    /// Creates a session builder answering from a remote endpoint.
    #[inline]
    pub fn remote(config: RemoteConfig) -> Self {
        Self::with_resolver(RemoteResolver::new(config))
    }

    /// Replaces the welcome message.
    #[inline]
    pub fn with_welcome<S: Into<String>>(mut self, welcome: S) -> Self {
        self.widget_builder = self.widget_builder.with_welcome(welcome);
        self
    }

    /// Attaches a callback to be invoked after every transcript change.
    #[inline]
    pub fn on_change(
        mut self,
        on_change: impl Fn(&TranscriptSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.widget_builder = self.widget_builder.on_change(on_change);
        self
    }

    /// Attaches a callback to be invoked when an answer has arrived.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.widget_builder = self.widget_builder.on_idle(on_idle);
        self
    }

    /// Builds a new session.
    pub fn build(self) -> ChatSession {
        let widget = self.widget_builder.build();
        ChatSession { widget }
    }
}

/// A chat session, like a floating panel that displays messages and has
/// an input box.
///
/// The session is basically a wrapper around [`ChatWidget`].
pub struct ChatSession {
    widget: ChatWidget,
}

impl ChatSession {
    /// Sends a message typed by the visitor.
    #[inline]
    pub fn send_message(
        &self,
        message: &str,
    ) -> Result<(), WidgetClosedError> {
        self.widget.submit(message)
    }

    /// Sends one of the offered suggestions.
    #[inline]
    pub fn select_suggestion(
        &self,
        suggestion: &str,
    ) -> Result<(), WidgetClosedError> {
        self.widget.select_suggestion(suggestion)
    }

    /// Clears the chat.
    #[inline]
    pub fn clear(&self) -> Result<(), WidgetClosedError> {
        self.widget.reset()
    }

    /// Returns the current transcript.
    #[inline]
    pub async fn snapshot(
        &self,
    ) -> Result<TranscriptSnapshot, WidgetClosedError> {
        self.widget.snapshot().await
    }
}
