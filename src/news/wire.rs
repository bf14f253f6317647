use serde::Deserialize;
use serde_json::Value;

use crate::core::AvError;

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) source: String,
    pub(crate) authors: Vec<String>,
    pub(crate) time_published: String,
    pub(crate) ticker_sentiment: Vec<TickerSentimentNode>,
    pub(crate) topics: Vec<TopicNode>,
}

#[derive(Deserialize)]
pub(crate) struct TickerSentimentNode {
    pub(crate) ticker: String,
    pub(crate) relevance_score: String,
    pub(crate) ticker_sentiment_score: String,
    pub(crate) ticker_sentiment_label: String,
}

#[derive(Deserialize)]
pub(crate) struct TopicNode {
    pub(crate) topic: String,
    pub(crate) relevance_score: String,
}

/// One archived polling response, discriminated by the `feed` marker key.
pub(crate) enum NewsDocument {
    /// Valid payload: the article list under `feed`.
    Feed(Vec<ArticleNode>),
    /// Error payload from a failed poll; the normalizer skips it.
    ErrorMessage,
}

impl NewsDocument {
    /// Decode one archived document.
    ///
    /// A document without the marker key (or one that is not a JSON object)
    /// is the error-payload shape and is tolerated. Discrimination is by key
    /// presence: a `feed` that is present but null or otherwise off-schema
    /// is a feed-contract break, not an error payload.
    pub(crate) fn decode(document: &Value) -> Result<NewsDocument, AvError> {
        let Some(object) = document.as_object() else {
            return Ok(NewsDocument::ErrorMessage);
        };
        let Some(feed) = object.get("feed") else {
            return Ok(NewsDocument::ErrorMessage);
        };
        let articles = Vec::<ArticleNode>::deserialize(feed).map_err(|e| {
            AvError::schema("news", format!("feed does not match the article schema: {e}"))
        })?;
        Ok(NewsDocument::Feed(articles))
    }
}
