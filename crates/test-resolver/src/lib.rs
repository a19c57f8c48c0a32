//! A scripted resolver for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use brandsetu_chat_resolver::{
    AnswerResolver, ErrorKind, Resolution, ResolverError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ResolverError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Script {
    outcomes: VecDeque<PresetOutcome>,
    received: Vec<String>,
}

/// A scripted resolver for testing purpose.
///
/// Before resolving, you need to setup the script, which is how the
/// resolver should answer each request in order. Every `resolve` call
/// consumes one outcome. If there are no enough outcomes in the script,
/// an error will be returned.
///
/// # Note
///
/// This type is not optimized for production use, you should only use it
/// for testing.
#[derive(Clone, Default)]
pub struct TestResolver {
    script: Arc<Mutex<Script>>,
    opening_suggestions: Vec<String>,
    delay: Option<Duration>,
}

impl TestResolver {
    #[inline]
    pub fn add_outcome(&mut self, outcome: PresetOutcome) {
        self.lock_script().outcomes.push_back(outcome);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    #[inline]
    pub fn set_opening_suggestions<I, S>(&mut self, suggestions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opening_suggestions =
            suggestions.into_iter().map(Into::into).collect();
    }

    /// Texts received so far, in call order.
    pub fn received(&self) -> Vec<String> {
        self.lock_script().received.clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AnswerResolver for TestResolver {
    type Error = crate::Error;

    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + 'static
    {
        let outcome = {
            let mut script = self.lock_script();
            script.received.push(text.to_owned());
            script.outcomes.pop_front()
        };
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            match outcome {
                Some(PresetOutcome::Reply(resolution)) => Ok(resolution),
                Some(PresetOutcome::Failure(kind)) => Err(Error {
                    message: "scripted failure",
                    kind,
                }),
                None => Err(Error {
                    message: "no enough outcomes",
                    kind: ErrorKind::Other,
                }),
            }
        }
    }

    fn opening_suggestions(&self) -> Vec<String> {
        self.opening_suggestions.clone()
    }
}
