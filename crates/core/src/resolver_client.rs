use std::pin::Pin;
use std::sync::Arc;

use brandsetu_chat_resolver::{AnswerResolver, Resolution, ResolverError};
use tracing::Instrument;

pub type ResolveResult = Result<Resolution, Box<dyn ResolverError>>;
type BoxedResolveFuture = Pin<Box<dyn Future<Output = ResolveResult> + Send>>;
type HandlerFn = Arc<dyn Fn(String) -> BoxedResolveFuture + Send + Sync>;

/// A wrapper around an answer resolver that provides a type-erased
/// interface for the other modules.
#[derive(Clone)]
pub struct ResolverClient {
    handler_fn: HandlerFn,
    opening_suggestions: Vec<String>,
}

impl ResolverClient {
    #[inline]
    pub fn new<R: AnswerResolver + 'static>(resolver: R) -> Self {
        let opening_suggestions = resolver.opening_suggestions();
        // We have to erase the type `R`, since `ResolverClient` doesn't
        // have a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |text: String| {
            let fut = resolver.resolve(&text);
            let fut: BoxedResolveFuture = Box::pin(
                async move {
                    trace!("resolving: {text:?}");
                    match fut.await {
                        Ok(resolution) => {
                            trace!("resolved: {resolution:?}");
                            Ok(resolution)
                        }
                        Err(err) => {
                            error!("got an error: {err:?}");
                            Err(Box::new(err) as Box<dyn ResolverError>)
                        }
                    }
                }
                .instrument(trace_span!("resolver client req")),
            );
            fut
        });
        Self {
            handler_fn,
            opening_suggestions,
        }
    }

    /// Resolves the text.
    ///
    /// The returned future doesn't borrow `self`.
    #[inline]
    pub fn resolve(
        &self,
        text: String,
    ) -> impl Future<Output = ResolveResult> + Send + 'static {
        (self.handler_fn)(text)
    }

    #[inline]
    pub fn opening_suggestions(&self) -> &[String] {
        &self.opening_suggestions
    }
}

#[cfg(test)]
mod tests {
    use brandsetu_chat_resolver::ErrorKind;
    use brandsetu_chat_test_resolver::{PresetOutcome, TestResolver};

    use super::*;

    #[tokio::test]
    async fn test_resolve() {
        let mut resolver = TestResolver::default();
        resolver.set_opening_suggestions(["Pricing?"]);
        for _ in 0..3 {
            resolver.add_outcome(PresetOutcome::reply("How are you?"));
        }

        let client = ResolverClient::new(resolver.clone());
        assert_eq!(client.opening_suggestions(), ["Pricing?"]);

        for _ in 0..3 {
            let resolution = client.resolve("Hi".to_owned()).await.unwrap();
            assert_eq!(resolution.reply.as_deref(), Some("How are you?"));
        }
        assert_eq!(resolver.received(), vec!["Hi", "Hi", "Hi"]);
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mut resolver = TestResolver::default();
        resolver.add_outcome(PresetOutcome::Failure(ErrorKind::Timeout));
        let client = ResolverClient::new(resolver);

        let err = client.resolve("Hi".to_owned()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }
}
