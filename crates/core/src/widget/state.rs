use std::fmt::{self, Debug};

use brandsetu_chat_resolver::ResolverError;
use tokio::select;
use tokio::sync::{mpsc, oneshot};
use tracing::Instrument;

use super::builder::{ChangeFn, IdleFn};
use crate::error::ResolverTaskError;
use crate::resolver_client::{ResolveResult, ResolverClient};
use crate::transcript::{PendingRequest, Transcript, TranscriptSnapshot};

#[derive(Debug)]
pub enum Command {
    Submit(String),
    Reset,
    Snapshot(oneshot::Sender<TranscriptSnapshot>),
}

pub struct Settled {
    request: PendingRequest,
    result: ResolveResult,
}

impl Debug for Settled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settled")
            .field("request", &self.request)
            .field("ok", &self.result.is_ok())
            .finish()
    }
}

pub struct WidgetState {
    pub(super) transcript: Transcript,
    pub(super) resolver_client: ResolverClient,
    pub(super) settled_tx: mpsc::UnboundedSender<Settled>,
    pub(super) on_change: Option<ChangeFn>,
    pub(super) on_idle: Option<IdleFn>,
}

impl WidgetState {
    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Submit(text) => self.submit(text),
            Command::Reset => {
                if self.transcript.is_awaiting() {
                    debug!("reset while awaiting, the answer will be dropped");
                }
                self.transcript.reset();
                self.notify_change();
            }
            Command::Snapshot(tx) => {
                tx.send(self.transcript.snapshot()).ok();
            }
        }
    }

    fn submit(&mut self, text: String) {
        let Some(request) = self.transcript.submit(&text) else {
            if self.transcript.is_awaiting() {
                warn!("still awaiting an answer, submission dropped");
            } else {
                debug!("blank submission ignored");
            }
            return;
        };
        self.notify_change();

        let fut = self.resolver_client.resolve(request.text().to_owned());
        let resolve_task = tokio::spawn(fut.in_current_span());
        let settled_tx = self.settled_tx.clone();
        tokio::spawn(
            async move {
                // No cancellation: once started, something is always
                // delivered back to the loop, even if the resolver panics.
                let result = match resolve_task.await {
                    Ok(result) => result,
                    Err(err) => {
                        let err = ResolverTaskError::from(err);
                        error!("{err}");
                        Err(Box::new(err) as Box<dyn ResolverError>)
                    }
                };
                settled_tx.send(Settled { request, result }).ok();
            }
            .in_current_span(),
        );
    }

    fn handle_settled(&mut self, settled: Settled) {
        let Settled { request, result } = settled;
        let accepted = match result {
            Ok(resolution) => self.transcript.on_resolved(&request, resolution),
            Err(_) => self.transcript.on_failed(&request),
        };
        if !accepted {
            debug!("discarded a stale answer for {:?}", request.text());
            return;
        }
        self.notify_change();
        if let Some(on_idle) = &self.on_idle {
            on_idle();
        }
    }

    #[inline]
    fn notify_change(&self) {
        if let Some(on_change) = &self.on_change {
            on_change(&self.transcript.snapshot());
        }
    }
}

pub async fn run_widget(
    mut state: WidgetState,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    mut settled_rx: mpsc::UnboundedReceiver<Settled>,
) {
    let span = trace_span!("chat widget");
    async move {
        debug!("started");
        state.notify_change();
        loop {
            select! {
                biased;

                settled = settled_rx.recv() => {
                    // The state keeps a sender, so this never ends.
                    let Some(settled) = settled else {
                        break;
                    };
                    trace!("settled: {settled:?}");
                    state.handle_settled(settled);
                }
                cmd = cmd_rx.recv() => {
                    let Some(cmd) = cmd else {
                        break;
                    };
                    trace!("received command: {cmd:?}");
                    state.handle_command(cmd);
                }
            }
        }
        debug!("will terminate");
    }
    .instrument(span)
    .await
}
