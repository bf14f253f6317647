use chrono::NaiveDateTime;
use serde::Serialize;

use crate::news::TopicScores;

/// One normalized row of the news table: a single article's sentiment for
/// the tracked instrument.
///
/// An article mentioning several instruments contributes at most the row for
/// the tracked one; articles that never mention it contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsRecord {
    /// Publication timestamp exactly as the feed spells it
    /// (`YYYYMMDD'T'HHMMSS`). Part of the article identity key.
    pub time_published: String,
    /// All author names joined with `,`, insertion order, no trailing
    /// separator. Part of the article identity key.
    pub authors: String,
    /// The headline of the article.
    pub title: String,
    /// The article summary.
    pub summary: String,
    /// The publishing outlet. Part of the article identity key.
    pub source: String,
    /// The tracked instrument symbol this row scores.
    pub ticker: String,
    /// How relevant the article is to the tracked instrument, in `[0, 1]`.
    pub relevance_score: f64,
    /// Sentiment score of the article towards the tracked instrument.
    pub ticker_sentiment_score: f64,
    /// The feed's categorical label for the sentiment (e.g. `"Bullish"`).
    pub ticker_sentiment_label: String,
    /// Relevance per supported topic, `0.00` for topics not touched.
    #[serde(flatten)]
    pub topics: TopicScores,
    /// Publication time rounded up to the next 5-minute bucket boundary;
    /// the key the temporal aligner joins on.
    pub formatted_time: NaiveDateTime,
}
