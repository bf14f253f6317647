mod api;
mod model;
mod normalize;
mod topics;
pub(crate) mod wire;

pub use model::NewsRecord;
pub use normalize::normalize_news;
pub use topics::{Topic, TopicScores};

use serde_json::Value;

use crate::core::{AvClient, AvError};

/// A builder for polling the news-sentiment feed for a symbol.
///
/// `fetch` returns the raw polling document exactly as served, error
/// payloads included. Raw documents are the pipeline's unit of storage; the
/// schema is kept in its original form and normalization happens at
/// analysis time via [`normalize_news`].
pub struct NewsBuilder {
    client: AvClient,
    symbol: String,
    limit: Option<u32>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            limit: None,
        }
    }

    /// Cap the number of articles returned. The feed defaults to its most
    /// recent 50.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Executes the request and returns the raw polling document.
    ///
    /// # Errors
    ///
    /// Returns an `AvError` if the request fails, the server answers with an
    /// unexpected status, or the body is not JSON.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn fetch(self) -> Result<Value, AvError> {
        api::fetch_news(&self.client, &self.symbol, self.limit).await
    }
}
