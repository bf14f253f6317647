use crate::core::PipelineConfig;

use super::model::AlignedRecord;

/// Sentiment predicates over aligned rows.
///
/// These annotate rather than mutate: consumers filter or flag the aligned
/// table through them, and the table itself never changes shape.
impl AlignedRecord {
    /// The attached ticker sentiment score, if any news is attached.
    #[must_use]
    pub fn sentiment_score(&self) -> Option<f64> {
        self.news.as_ref().map(|news| news.ticker_sentiment_score)
    }

    /// True when the attached sentiment is extreme in either direction,
    /// at or beyond the highlight threshold.
    #[must_use]
    pub fn is_highlight(&self, config: &PipelineConfig) -> bool {
        self.sentiment_score()
            .is_some_and(|score| score.abs() >= config.highlight_threshold)
    }

    /// True when the attached sentiment is strictly above the bullish
    /// threshold.
    #[must_use]
    pub fn is_bullish(&self, config: &PipelineConfig) -> bool {
        self.sentiment_score()
            .is_some_and(|score| score > config.bullish_threshold)
    }

    /// True when the attached sentiment is strictly below the negated
    /// bearish threshold.
    #[must_use]
    pub fn is_bearish(&self, config: &PipelineConfig) -> bool {
        self.sentiment_score()
            .is_some_and(|score| score < -config.bearish_threshold)
    }
}
