//! A terminal front end for the chat widget.
//!
//! Answers come from the built-in table, unless `BRANDSETU_CHAT_ENDPOINT`
//! points at a chat backend.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use brandsetu_chat::ChatSessionBuilder;
use brandsetu_chat::core::transcript::TranscriptSnapshot;
use brandsetu_chat::render::TerminalView;
use brandsetu_chat_remote_resolver::{RemoteConfigBuilder, RemoteResolver};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

enum SessionEvent {
    Changed(TranscriptSnapshot),
    Idle,
}

const CLEAR_COMMAND: &str = "/clear";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let session_builder = match env::var("BRANDSETU_CHAT_ENDPOINT") {
        Ok(endpoint) => remote_session_builder(endpoint).await,
        Err(_) => {
            debug!("no endpoint configured, answering locally");
            ChatSessionBuilder::local()
        }
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let session = session_builder
        .on_change({
            let event_tx = event_tx.clone();
            move |snapshot| {
                event_tx.send(SessionEvent::Changed(snapshot.clone())).ok();
            }
        })
        .on_idle({
            let event_tx = event_tx.clone();
            move || {
                event_tx.send(SessionEvent::Idle).ok();
            }
        })
        .build();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let mut view = TerminalView::new();
    println!("Type a question, a suggestion number, or {CLEAR_COMMAND}.");

    'outer: loop {
        // Catch up with changes that arrived while we were not waiting,
        // e.g. the initial render and resets.
        if let Ok(snapshot) = session.snapshot().await {
            print_lines(view.update(&snapshot));
        }
        while event_rx.try_recv().is_ok() {}

        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let sent = if line == CLEAR_COMMAND {
            if session.clear().is_err() {
                break;
            }
            continue;
        } else if let Some(suggestion) = view.pick(line) {
            session.select_suggestion(suggestion)
        } else {
            session.send_message(line)
        };
        if sent.is_err() {
            error!("the chat widget has stopped");
            break;
        }

        let mut progress_bar = None;

        loop {
            let sleep = sleep(Duration::from_millis(100));
            let event = select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        break 'outer;
                    };
                    event
                },
                _ = sleep => {
                    progress_bar
                        .get_or_insert_with(|| {
                            let progress_bar = ProgressBar::new_spinner();
                            progress_bar.set_style(progress_style.clone());
                            progress_bar.set_message("BSD Bot is typing...");
                            progress_bar
                        })
                        .inc(1);
                    continue;
                }
            };

            // Finish the progress bar before printing anything else.
            if let Some(progress_bar) = progress_bar.take() {
                progress_bar.finish_and_clear();
            }

            match event {
                SessionEvent::Changed(snapshot) => {
                    print_lines(view.update(&snapshot));
                }
                SessionEvent::Idle => {
                    break;
                }
            }
        }
    }
}

async fn remote_session_builder(endpoint: String) -> ChatSessionBuilder {
    let mut config = RemoteConfigBuilder::new().with_base_url(endpoint);
    if let Ok(secs) = env::var("BRANDSETU_CHAT_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => config = config.with_timeout(Duration::from_secs(secs)),
            Err(err) => warn!("ignoring invalid timeout {secs:?}: {err}"),
        }
    }
    let resolver = RemoteResolver::new(config.build());

    match resolver.check_health().await {
        Ok(health) if health.is_healthy() => {
            info!("endpoint is healthy (version {:?})", health.version);
        }
        Ok(health) => warn!("endpoint reports status {:?}", health.status),
        Err(err) => warn!("endpoint health check failed: {err}"),
    }
    ChatSessionBuilder::with_resolver(resolver)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
