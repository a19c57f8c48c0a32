//! A resolver that forwards questions to a remote chat endpoint.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use brandsetu_chat_resolver::{
    AnswerResolver, ErrorKind, Resolution, ResolverError,
};
use mime::Mime;
use reqwest::{Client, Response, header};

pub use config::{RemoteConfig, RemoteConfigBuilder};
pub use proto::Health;
use proto::ChatResponse;

/// Error type for [`RemoteResolver`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_status() {
            ErrorKind::Status
        } else if err.is_decode() {
            ErrorKind::Malformed
        } else if err.is_connect() || err.is_request() {
            ErrorKind::Network
        } else {
            ErrorKind::Other
        };
        Self::new(format!("{err}"), kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ResolverError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Resolver backed by the `/api/chat` endpoint.
#[derive(Clone, Debug)]
pub struct RemoteResolver {
    client: Client,
    config: Arc<RemoteConfig>,
}

impl RemoteResolver {
    /// Creates a new `RemoteResolver` with the given configuration.
    #[inline]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Probes the `/api/health` endpoint.
    pub fn check_health(
        &self,
    ) -> impl Future<Output = Result<Health, Error>> + Send + 'static {
        let resp_fut = self
            .client
            .get(self.config.health_url())
            .header(header::ACCEPT, "application/json")
            .timeout(self.config.timeout)
            .send();

        async move {
            let resp = resp_fut.await.and_then(Response::error_for_status)?;
            read_json(resp).await
        }
    }
}

impl AnswerResolver for RemoteResolver {
    type Error = Error;

    fn resolve(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Resolution, Self::Error>> + Send + 'static
    {
        let chat_req = proto::create_request(text, &self.config);
        trace!("sending chat request: {chat_req:?}");
        let resp_fut = self
            .client
            .post(self.config.chat_url())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .timeout(self.config.timeout)
            .json(&chat_req)
            .send();

        async move {
            let resp = resp_fut.await.and_then(Response::error_for_status)?;
            let chat_resp: ChatResponse = read_json(resp).await?;
            trace!("got chat response: {chat_resp:?}");
            Ok(proto::into_resolution(chat_resp))
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<T, Error> {
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let is_json = content_type
        .as_deref()
        .and_then(|v| v.parse().ok())
        .map(|m: Mime| {
            m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
        })
        .unwrap_or(false);
    if !is_json {
        // The body decides, whatever the header says.
        debug!("unexpected content type {content_type:?}, parsing anyway");
    }

    let body = resp.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::Malformed))
}
