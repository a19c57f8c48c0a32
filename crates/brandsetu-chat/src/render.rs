//! Plain terminal rendering of a transcript.

use brandsetu_chat_core::transcript::{Message, TranscriptSnapshot};
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";
const BOT_NAME: &str = "BSD Bot";

/// Keeps track of what has already been printed, so that each snapshot
/// only prints what is new.
#[derive(Debug, Default)]
pub struct TerminalView {
    first_id: Option<String>,
    printed: usize,
    suggestions: Vec<String>,
}

impl TerminalView {
    /// Creates an empty view.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestions currently on screen, in the numbered order.
    #[inline]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Resolves a numbered pick (`1`-based) to the suggestion text.
    pub fn pick(&self, input: &str) -> Option<&str> {
        let idx: usize = input.trim().parse().ok()?;
        let idx = idx.checked_sub(1)?;
        self.suggestions.get(idx).map(String::as_str)
    }

    /// Returns the lines to print for `snapshot`.
    pub fn update(&mut self, snapshot: &TranscriptSnapshot) -> Vec<String> {
        let mut lines = vec![];

        let first_id = snapshot.messages.first().map(|m| m.id().to_owned());
        if first_id != self.first_id {
            if self.first_id.is_some() {
                lines.push(format!("{}", "── chat cleared ──".dimmed()));
            }
            self.first_id = first_id;
            self.printed = 0;
            self.suggestions.clear();
        }

        for message in snapshot.messages.iter().skip(self.printed) {
            lines.push(render_message(message));
        }
        self.printed = snapshot.messages.len();

        if snapshot.suggestions != self.suggestions {
            self.suggestions = snapshot.suggestions.clone();
            for (idx, suggestion) in self.suggestions.iter().enumerate() {
                lines.push(format!(
                    "   {} {}",
                    format!("[{}]", idx + 1).bright_yellow(),
                    suggestion.yellow()
                ));
            }
        }
        lines
    }
}

fn render_message(message: &Message) -> String {
    if message.is_user() {
        format!(
            "{}🧑 {} {}",
            BAR_CHAR.bright_green(),
            message.text().bright_white(),
            message.timestamp().dimmed()
        )
    } else {
        let bar = BAR_CHAR.bright_cyan();
        let mut out = format!(
            "{bar}🤖 {} {}",
            BOT_NAME.bold(),
            message.timestamp().dimmed()
        );
        for line in message.text().lines() {
            out.push('\n');
            out.push_str(&format!("{bar}{}", line.bright_white()));
        }
        out
    }
}
