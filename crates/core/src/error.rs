use std::error::Error;
use std::fmt::{self, Display};

use brandsetu_chat_resolver::{ErrorKind, ResolverError};
use tokio::task::JoinError;

/// Returned by [`ChatWidget`](crate::ChatWidget) methods once its event
/// loop is gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetClosedError;

impl Display for WidgetClosedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("chat widget is closed")
    }
}

impl Error for WidgetClosedError {}

/// A resolver task that never produced an answer (it panicked or was
/// aborted).
#[derive(Debug)]
pub(crate) struct ResolverTaskError {
    reason: String,
}

impl From<JoinError> for ResolverTaskError {
    fn from(err: JoinError) -> Self {
        let reason = if err.is_panic() {
            "resolver panicked".to_owned()
        } else {
            format!("resolver task failed: {err}")
        };
        Self { reason }
    }
}

impl Display for ResolverTaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl Error for ResolverTaskError {}

impl ResolverError for ResolverTaskError {
    #[inline]
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use tokio::task::JoinHandle;

    use super::*;

    #[test]
    fn test_widget_closed() {
        assert_eq!(WidgetClosedError.to_string(), "chat widget is closed");
        assert_eq!(format!("{WidgetClosedError:?}"), "WidgetClosedError");
    }

    #[tokio::test]
    async fn test_panicked_task() {
        let task: JoinHandle<()> = tokio::spawn(async {
            panic!("resolver bug");
        });
        let err = task.await.unwrap_err();
        let err = ResolverTaskError::from(err);
        assert_eq!(err.to_string(), "resolver panicked");
        assert_eq!(err.kind(), ErrorKind::Other);
    }
}
