use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for [`RemoteConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RemoteConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    session_id: Option<String>,
}

impl RemoteConfigBuilder {
    /// Creates a builder with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL, without the `/api/...` path.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the timeout of a whole request, from connecting to reading
    /// the body.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a session id forwarded with every chat request.
    #[inline]
    pub fn with_session_id<S: Into<String>>(mut self, session_id: S) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> RemoteConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        RemoteConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            session_id: self.session_id,
        }
    }
}

/// Configuration for the remote resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteConfig {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) session_id: Option<String>,
}

impl RemoteConfig {
    #[inline]
    pub(crate) fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, "/api/chat")
    }

    #[inline]
    pub(crate) fn health_url(&self) -> String {
        format!("{}{}", self.base_url, "/api/health")
    }
}
