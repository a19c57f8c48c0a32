use std::sync::Arc;

use brandsetu_chat_resolver::AnswerResolver;

use super::ChatWidget;
use crate::clock::{Clock, SystemClock};
use crate::resolver_client::ResolverClient;
use crate::transcript::{DEFAULT_WELCOME, TranscriptSnapshot};

pub(crate) type ChangeFn = Box<dyn Fn(&TranscriptSnapshot) + Send + Sync>;
pub(crate) type IdleFn = Box<dyn Fn() + Send + Sync>;

/// [`ChatWidget`] builder.
pub struct ChatWidgetBuilder {
    pub(crate) resolver_client: ResolverClient,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) welcome: String,
    pub(crate) on_change: Option<ChangeFn>,
    pub(crate) on_idle: Option<IdleFn>,
}

impl ChatWidgetBuilder {
    /// Creates a new builder with the specified resolver.
    #[inline]
    pub fn with_resolver<R: AnswerResolver + 'static>(resolver: R) -> Self {
        Self {
            resolver_client: ResolverClient::new(resolver),
            clock: Arc::new(SystemClock),
            welcome: DEFAULT_WELCOME.to_owned(),
            on_change: None,
            on_idle: None,
        }
    }

    /// Replaces the clock used for message timestamps.
    #[inline]
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replaces the welcome message.
    #[inline]
    pub fn with_welcome<S: Into<String>>(mut self, welcome: S) -> Self {
        self.welcome = welcome.into();
        self
    }

    /// Attaches a callback to be invoked after every state change.
    ///
    /// This is where a presentation layer re-renders and scrolls the
    /// transcript to the bottom.
    #[inline]
    pub fn on_change(
        mut self,
        on_change: impl Fn(&TranscriptSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Attaches a callback to be invoked when a resolution settles.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Builds the widget and starts its event loop.
    ///
    /// Must be called within a Tokio runtime.
    #[inline]
    pub fn build(self) -> ChatWidget {
        ChatWidget::spawn_from_builder(self)
    }
}
