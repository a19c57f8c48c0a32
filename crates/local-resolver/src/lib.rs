//! A resolver that answers from a code-embedded keyword table.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod brandsetu;
mod delay;
mod table;

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use brandsetu_chat_resolver::{
    AnswerResolver, ErrorKind, Resolution, ResolverError,
};
use tokio::time::sleep;

pub use brandsetu::{DEFAULT_ANSWER, QUICK_QUESTIONS, brandsetu_table};
pub use delay::TypingDelay;
pub use table::{QaEntry, QaTable};

/// Error type for [`LocalResolver`].
///
/// Local resolution is pure and never fails, so this type has no values.
#[derive(Debug)]
pub enum Error {}

impl Display for Error {
    fn fmt(&self, _f: &mut Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl StdError for Error {}

impl ResolverError for Error {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

/// Answers from a [`QaTable`] with first-match-wins keyword matching.
#[derive(Clone, Debug)]
pub struct LocalResolver {
    table: Arc<QaTable>,
    quick_questions: Vec<String>,
    typing_delay: TypingDelay,
}

impl LocalResolver {
    /// Creates a resolver over `table`, answering without delay.
    #[inline]
    pub fn new(table: QaTable) -> Self {
        Self {
            table: Arc::new(table),
            quick_questions: vec![],
            typing_delay: TypingDelay::None,
        }
    }

    /// The stock Brandsetu Digital resolver: the built-in table, the four
    /// quick questions and a human-like typing delay.
    pub fn brandsetu() -> Self {
        Self::new(brandsetu_table())
            .with_quick_questions(QUICK_QUESTIONS)
            .with_typing_delay(TypingDelay::HUMAN)
    }

    /// Sets the quick questions shown before the first user message.
    #[inline]
    pub fn with_quick_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quick_questions = questions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the simulated typing delay.
    #[inline]
    pub fn with_typing_delay(mut self, delay: TypingDelay) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Returns the table this resolver answers from.
    #[inline]
    pub fn table(&self) -> &QaTable {
        &self.table
    }

    /// Finds the answer for `input` synchronously.
    #[inline]
    pub fn find_answer(&self, input: &str) -> &str {
        self.table.find_answer(input)
    }
}

impl AnswerResolver for LocalResolver {
    type Error = Error;

    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + 'static
    {
        let entry = self.table.find_entry(text);
        match entry {
            Some(entry) => trace!("matched entry: {}", entry.question),
            None => trace!("no entry matched, using the default answer"),
        }
        let answer = entry
            .map(|entry| entry.answer.clone())
            .unwrap_or_else(|| self.table.default_answer().to_owned());
        let delay = self.typing_delay.sample();

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            Ok(Resolution::with_reply(answer))
        }
    }

    fn opening_suggestions(&self) -> Vec<String> {
        self.quick_questions.clone()
    }
}
