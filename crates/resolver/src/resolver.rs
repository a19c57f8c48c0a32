use std::error::Error;

use crate::error::ErrorKind;
use crate::resolution::Resolution;

/// The error type for an answer resolver.
pub trait ResolverError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that turns raw user text into a reply.
///
/// Once the resolver is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the resolver should be prepared for being dropped anytime.
pub trait AnswerResolver: Send + Sync {
    /// The error type that may be returned by the resolver.
    type Error: ResolverError;

    /// Resolves the (already trimmed) user text into a reply.
    ///
    /// The returned future must be fully independent of `self`. Once
    /// started, it is always driven to completion by the caller.
    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + 'static;

    /// Suggestions offered before the visitor has said anything.
    ///
    /// Resolvers that never return per-answer suggestions usually have a
    /// static list of quick questions to show here.
    fn opening_suggestions(&self) -> Vec<String> {
        vec![]
    }
}
