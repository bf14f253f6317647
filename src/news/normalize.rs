use chrono::{Duration, NaiveDateTime};
use serde_json::Value;

use crate::core::{AvError, PipelineConfig, dedup::dedup_by_key};
use crate::news::{
    model::NewsRecord,
    topics::{Topic, TopicScores},
    wire::{ArticleNode, NewsDocument},
};

/// Publication timestamps as the feed spells them, e.g. `20241202T143000`.
const TIME_PUBLISHED_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Width of the alignment bucket, pinned to the 5-minute interval the price
/// feed is polled at.
pub(crate) const BUCKET_MINUTES: i64 = 5;

/// Flatten archived news documents into the normalized news table.
///
/// Emits one [`NewsRecord`] per article and matching sentiment entry for the
/// tracked instrument, then removes duplicate articles (same
/// `(time_published, authors, source)`, first occurrence kept), drops rows
/// under the relevance cutoff, and sorts ascending by `formatted_time`. The
/// sort is stable, so simultaneous articles keep their input order.
///
/// Documents without the `feed` marker key are failed polls and contribute
/// nothing; a single bad poll must not abort a week of aggregated history.
/// An empty result is valid.
///
/// # Errors
///
/// Returns [`AvError::Schema`] when a document carries the marker key but an
/// article violates the feed contract: a required field is missing or a
/// numeric string does not parse. No partial table is produced.
pub fn normalize_news<I>(documents: I, config: &PipelineConfig) -> Result<Vec<NewsRecord>, AvError>
where
    I: IntoIterator<Item = Value>,
{
    let mut rows = Vec::new();
    for document in documents {
        match NewsDocument::decode(&document)? {
            NewsDocument::Feed(articles) => {
                for article in articles {
                    flatten_article(&article, config, &mut rows)?;
                }
            }
            NewsDocument::ErrorMessage => {}
        }
    }

    let rows = dedup_by_key(rows, |r: &NewsRecord| {
        (r.time_published.clone(), r.authors.clone(), r.source.clone())
    });

    let mut rows: Vec<NewsRecord> = rows
        .into_iter()
        .filter(|r| r.relevance_score >= config.relevance_cutoff)
        .collect();
    rows.sort_by_key(|r| r.formatted_time);
    Ok(rows)
}

/// One flat row per sentiment entry naming the tracked instrument. Articles
/// that never mention it are dropped without touching their numeric fields.
fn flatten_article(
    article: &ArticleNode,
    config: &PipelineConfig,
    out: &mut Vec<NewsRecord>,
) -> Result<(), AvError> {
    let matching: Vec<_> = article
        .ticker_sentiment
        .iter()
        .filter(|s| s.ticker == config.symbol)
        .collect();
    if matching.is_empty() {
        return Ok(());
    }

    let authors = article.authors.join(",");

    let published = NaiveDateTime::parse_from_str(&article.time_published, TIME_PUBLISHED_FORMAT)
        .map_err(|e| {
        AvError::schema(
            "news",
            format!(
                "article {:?}: time_published {:?} is not {TIME_PUBLISHED_FORMAT}: {e}",
                article.title, article.time_published
            ),
        )
    })?;
    let formatted_time = ceil_to_bucket(published);

    let mut topics = TopicScores::default();
    for node in &article.topics {
        // Topics outside the supported vocabulary are dropped.
        if let Some(topic) = Topic::from_feed_name(&node.topic) {
            topics.set(topic, parse_score(&node.relevance_score, "topic relevance_score", article)?);
        }
    }

    for sentiment in matching {
        out.push(NewsRecord {
            time_published: article.time_published.clone(),
            authors: authors.clone(),
            title: article.title.clone(),
            summary: article.summary.clone(),
            source: article.source.clone(),
            ticker: sentiment.ticker.clone(),
            relevance_score: parse_score(&sentiment.relevance_score, "relevance_score", article)?,
            ticker_sentiment_score: parse_score(
                &sentiment.ticker_sentiment_score,
                "ticker_sentiment_score",
                article,
            )?,
            ticker_sentiment_label: sentiment.ticker_sentiment_label.clone(),
            topics,
            formatted_time,
        });
    }
    Ok(())
}

/// Numeric coercion of the feed's string-typed scores. Failure is a
/// feed-contract break, not something to coerce to zero.
fn parse_score(raw: &str, field: &str, article: &ArticleNode) -> Result<f64, AvError> {
    raw.trim().parse::<f64>().map_err(|_| {
        AvError::schema(
            "news",
            format!(
                "article {:?} ({}): {field} is not numeric: {raw:?}",
                article.title, article.time_published
            ),
        )
    })
}

/// Round up to the next bucket boundary; timestamps already on a boundary
/// stay put. Aligns publication times with the price feed's closing times.
fn ceil_to_bucket(ts: NaiveDateTime) -> NaiveDateTime {
    let bucket = BUCKET_MINUTES * 60;
    let rem = ts.and_utc().timestamp().rem_euclid(bucket);
    if rem == 0 {
        ts
    } else {
        ts + Duration::seconds(bucket - rem)
    }
}
