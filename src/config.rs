//! client configuration
//!
//! build a [`ClientConfig`] with a bearer token and optional overrides.
//! pass it to [`crate::Client::new`] to create a client.

use crate::error::{Error, Result};
use crate::request::bearer_header;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// public graphql endpoint of the premier lacrosse league stats api
pub const GRAPHQL_ENDPOINT: &str = "https://api.stats.premierlacrosseleague.com/graphql";

/// env var holding the bearer token
pub const TOKEN_ENV: &str = "PLL_BEARER_TOKEN";

/// env var overriding the graphql endpoint
pub const ENDPOINT_ENV: &str = "PLL_GRAPHQL_URL";

type HttpClientBuilderFn = dyn Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync;

/// configuration for the stats client
#[derive(Clone)]
pub struct ClientConfig {
    /// original endpoint input
    pub(crate) raw_endpoint: String,

    /// graphql endpoint, if the input parsed
    pub(crate) endpoint: Option<Url>,

    /// bearer token sent with every request
    pub(crate) token: String,

    /// request timeout duration
    pub(crate) timeout: Duration,

    /// user agent string
    pub(crate) user_agent: String,

    /// additional headers to send with every request
    pub(crate) extra_headers: HeaderMap,

    /// prebuilt http client (takes precedence over http_client_builder)
    pub(crate) http_client: Option<reqwest::Client>,

    /// callback to customize the http client builder before building
    pub(crate) http_client_builder: Option<Arc<HttpClientBuilderFn>>,
}

impl ClientConfig {
    /// create a configuration for the public endpoint
    ///
    /// # example
    ///
    /// ```
    /// use pll::ClientConfig;
    ///
    /// let config = ClientConfig::new("your-token-here");
    /// assert_eq!(config.endpoint().unwrap().host_str(), Some("api.stats.premierlacrosseleague.com"));
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            raw_endpoint: GRAPHQL_ENDPOINT.to_string(),
            endpoint: Url::parse(GRAPHQL_ENDPOINT).ok(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("pll-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            extra_headers: HeaderMap::new(),
            http_client: None,
            http_client_builder: None,
        }
    }

    /// read the token from `PLL_BEARER_TOKEN` and an optional endpoint
    /// override from `PLL_GRAPHQL_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config(format!("{TOKEN_ENV} is not set")))?;

        let config = Self::new(token);
        Ok(match lookup(ENDPOINT_ENV) {
            Some(endpoint) if !endpoint.is_empty() => config.with_endpoint(endpoint),
            _ => config,
        })
    }

    /// point the client at a different graphql endpoint
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        let raw = endpoint.as_ref();
        self.raw_endpoint = raw.to_string();
        self.endpoint = Url::parse(raw).ok();
        self
    }

    /// set the request timeout
    ///
    /// default: 30 seconds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// set a custom user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// add a header to every request
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.extra_headers.insert(name, value);
        self
    }

    /// add a set of headers to every request
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers.extend(headers);
        self
    }

    /// access extra headers configured on this client
    pub fn extra_headers(&self) -> &HeaderMap {
        &self.extra_headers
    }

    /// the parsed graphql endpoint, if valid
    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// inject a prebuilt http client.
    ///
    /// when set, this client is used as-is. timeout, user agent and extra
    /// headers come from the prebuilt client and the corresponding
    /// `ClientConfig` fields are ignored. the bearer token is still attached
    /// per request when non-empty; an empty token is accepted here because
    /// the caller may handle auth in the prebuilt client.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// customize the http client builder before the client is created.
    ///
    /// the callback receives a builder that already has the extra headers,
    /// user agent and timeout applied. ignored if `with_http_client` is
    /// also set.
    pub fn with_http_client_builder<F>(mut self, f: F) -> Self
    where
        F: Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync + 'static,
    {
        self.http_client_builder = Some(Arc::new(f));
        self
    }

    /// validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let endpoint = self.graphql_url()?;

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(Error::Config(format!(
                "invalid url scheme: {}. must be http or https",
                endpoint.scheme()
            )));
        }

        // token is only required when the client is not managing its own transport
        if self.http_client.is_none() && self.token.is_empty() {
            return Err(Error::Config("bearer token cannot be empty".to_string()));
        }

        if !self.token.is_empty() {
            bearer_header(&self.token)?;
        }

        Ok(())
    }

    pub(crate) fn graphql_url(&self) -> Result<Url> {
        self.endpoint
            .clone()
            .ok_or_else(|| Error::Config(format!("invalid endpoint: {}", self.raw_endpoint)))
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client> {
        if let Some(http) = &self.http_client {
            return Ok(http.clone());
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(self.extra_headers.clone())
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout);
        if let Some(customize) = &self.http_client_builder {
            builder = customize(builder);
        }

        Ok(builder.build()?)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.raw_endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("extra_headers", &self.extra_headers.len())
            .field("http_client", &self.http_client.is_some())
            .field("http_client_builder", &self.http_client_builder.is_some())
            .field("token", &"<redacted>")
            .finish()
    }
}
