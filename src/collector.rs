use crate::core::{AvClient, AvError};
use crate::intraday::IntradayBuilder;
use crate::news::NewsBuilder;
use crate::store::JsonlStore;

/// Polls both feeds for one tracked symbol and appends whatever comes back,
/// error payloads included, to the raw document stores.
///
/// Collection is deliberately dumb: no validation happens here, so a failed
/// poll on the provider side lands in the store as an error document and is
/// dealt with at normalization time. Scheduling is the caller's concern;
/// each call is one poll.
pub struct Collector {
    client: AvClient,
    symbol: String,
    news_store: JsonlStore,
    intraday_store: JsonlStore,
}

impl Collector {
    /// Creates a collector for a symbol, appending to the given stores.
    pub fn new(
        client: &AvClient,
        symbol: impl Into<String>,
        news_store: JsonlStore,
        intraday_store: JsonlStore,
    ) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            news_store,
            intraday_store,
        }
    }

    /// Fetches both feeds concurrently and appends one raw document to each
    /// store.
    ///
    /// # Errors
    ///
    /// Returns an `AvError` if either fetch fails at the transport level or
    /// either append fails. Provider error payloads are not failures; they
    /// are stored like any other document.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn poll_once(&self) -> Result<(), AvError> {
        let news = NewsBuilder::new(&self.client, &self.symbol).fetch();
        let intraday = IntradayBuilder::new(&self.client, &self.symbol).fetch();
        let (news, intraday) = tokio::try_join!(news, intraday)?;
        self.news_store.append(&news)?;
        self.intraday_store.append(&intraday)?;
        Ok(())
    }
}
