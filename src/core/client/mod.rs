//! Public client surface + builder.
//!
//! One `reqwest::Client` shared by every fetch builder, plus the query base
//! URL and API key. The base is overridable so offline tests can point the
//! client at a local mock server.

mod constants;

use crate::core::AvError;
use constants::{DEFAULT_BASE_QUERY, DEMO_API_KEY, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_query: Url,
    api_key: String,
}

impl Default for AvClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// Client with the given API key and default settings otherwise.
    ///
    /// # Errors
    ///
    /// Returns an `AvError` if the underlying HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AvError> {
        Self::builder().api_key(api_key).build()
    }

    /* -------- internal getters used by the fetch modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    user_agent: Option<String>,
    base_query: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query base (e.g. `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set the Alpha Vantage API key. Defaults to the public `demo` key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an `AvError` if a default URL fails to parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<AvClient, AvError> {
        let base_query = match self.base_query {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AvClient {
            http,
            base_query,
            api_key: self.api_key.unwrap_or_else(|| DEMO_API_KEY.to_string()),
        })
    }
}
