use serde_json::Value;

use crate::align::{AlignedRecord, merge_asof};
use crate::core::{AvError, PipelineConfig};
use crate::intraday::normalize_intraday;
use crate::news::normalize_news;
use crate::store::JsonlStore;

/// The batch analysis pass: normalize both raw feeds, then align them.
///
/// A run consumes one already materialized snapshot of documents and
/// produces one finished table. Runs are independent and idempotent given
/// the same snapshot; nothing is carried across runs.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline with the given knobs.
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Normalizes both document snapshots and joins news onto prices
    /// backward as-of, returning one row per surviving price bar, sorted
    /// ascending by closing time.
    ///
    /// Either snapshot may normalize to zero rows; the output then carries
    /// empty or news-less rows accordingly, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Schema`] when a document carries its feed marker
    /// but breaks the feed contract. Error payloads without the marker are
    /// skipped, not reported.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(symbol = %self.config.symbol))
    )]
    pub fn run<N, P>(
        &self,
        news_documents: N,
        price_documents: P,
    ) -> Result<Vec<AlignedRecord>, AvError>
    where
        N: IntoIterator<Item = Value>,
        P: IntoIterator<Item = Value>,
    {
        let news = normalize_news(news_documents, &self.config)?;
        let prices = normalize_intraday(price_documents)?;
        Ok(merge_asof(prices, &news))
    }

    /// Reads both stores back and runs over their contents.
    ///
    /// # Errors
    ///
    /// Returns any store read error in addition to everything [`Pipeline::run`]
    /// can return.
    pub fn run_from_stores(
        &self,
        news_store: &JsonlStore,
        intraday_store: &JsonlStore,
    ) -> Result<Vec<AlignedRecord>, AvError> {
        self.run(news_store.documents()?, intraday_store.documents()?)
    }
}
