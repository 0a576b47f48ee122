//! Authenticated client for the content API.

use graphql_config::PluginConfig;
use std::collections::HashMap;
use std::time::Duration;

/// Default timeout for requests (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A client bound to one dataset of the content API.
///
/// # Examples
///
/// ```no_run
/// use graphql_fetch::ApiClient;
/// use std::time::Duration;
///
/// let client = ApiClient::new("https://abc123.api.sanity.io/v1", "production")
///     .with_token("my-token")
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(client.dataset(), "production");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    dataset: String,
    token: Option<String>,
    headers: HashMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ApiClient {
    /// Creates a client for the given API base URL and dataset.
    ///
    /// Default settings:
    /// - 30 second request timeout
    /// - 10 second connection timeout
    /// - No token
    #[must_use]
    pub fn new(base_url: impl Into<String>, dataset: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            dataset: dataset.into(),
            token: None,
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Creates a client from plugin configuration.
    #[must_use]
    pub fn from_config(config: &PluginConfig) -> Self {
        let client = Self::new(config.api_url(), config.dataset.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs()));
        match &config.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        }
    }

    /// Sets the token sent as a bearer credential.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Adds a custom HTTP header to every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request timeout.
    ///
    /// This is the maximum time allowed for the entire request (connection + transfer).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Builds a GET request for a path relative to the base URL.
    pub(crate) fn get(&self, path: &str) -> reqwest::Result<reqwest::RequestBuilder> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?;

        let mut request = client.get(format!("{}{path}", self.base_url));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        Ok(request)
    }
}
