mod builder;
mod state;

use tokio::sync::{mpsc, oneshot};

pub use builder::ChatWidgetBuilder;
use state::{Command, WidgetState, run_widget};

use crate::error::WidgetClosedError;
use crate::transcript::{Transcript, TranscriptSnapshot};

/// A chat widget instance, which owns a transcript, an answer resolver and
/// the event loop driving them.
///
/// Commands are handled one at a time, in the order they were sent. The
/// resolver runs off the loop, and its completion is what moves the
/// transcript back to idle. At most one resolution is in flight: a
/// submission made while awaiting an answer is dropped.
#[derive(Clone)]
pub struct ChatWidget {
    cmd_tx: mpsc::UnboundedSender<Command>,
}

impl ChatWidget {
    /// Submits visitor text.
    ///
    /// Blank text, or text submitted while awaiting an answer, is ignored.
    #[inline]
    pub fn submit<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), WidgetClosedError> {
        self.send(Command::Submit(text.into()))
    }

    /// Picks one of the offered suggestions. Same as [`ChatWidget::submit`].
    #[inline]
    pub fn select_suggestion<S: Into<String>>(
        &self,
        suggestion: S,
    ) -> Result<(), WidgetClosedError> {
        self.submit(suggestion)
    }

    /// Clears the transcript back to the welcome message.
    ///
    /// A resolution still in flight completes, but its answer is dropped.
    #[inline]
    pub fn reset(&self) -> Result<(), WidgetClosedError> {
        self.send(Command::Reset)
    }

    /// Returns the current state, after all previously sent commands have
    /// been handled.
    pub async fn snapshot(
        &self,
    ) -> Result<TranscriptSnapshot, WidgetClosedError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx))?;
        rx.await.map_err(|_| WidgetClosedError)
    }

    #[inline]
    fn send(&self, cmd: Command) -> Result<(), WidgetClosedError> {
        self.cmd_tx.send(cmd).map_err(|_| WidgetClosedError)
    }
}

impl ChatWidget {
    fn spawn_from_builder(builder: ChatWidgetBuilder) -> Self {
        let ChatWidgetBuilder {
            resolver_client,
            clock,
            welcome,
            on_change,
            on_idle,
        } = builder;

        let transcript = Transcript::new(
            welcome,
            resolver_client.opening_suggestions().to_vec(),
            clock,
        );
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let state = WidgetState {
            transcript,
            resolver_client,
            settled_tx,
            on_change,
            on_idle,
        };
        tokio::spawn(run_widget(state, cmd_rx, settled_rx));
        Self { cmd_tx }
    }
}
