/// Explicit context threaded through the pipeline.
///
/// The original dashboard kept the tracked symbol and its policy thresholds
/// as module globals; here every component takes the configuration as a
/// value, so runs are deterministic and tests can tighten or loosen the
/// policy per call.
///
/// `new` applies the production policy: relevance cutoff `0.25`, bullish and
/// bearish thresholds `0.15`, highlight threshold `0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// The single instrument symbol the pipeline tracks (e.g. `"AAPL"`).
    pub symbol: String,
    /// Minimum `relevance_score` (inclusive) for a news record to survive
    /// normalization. Less relevant articles are statistically insignificant.
    pub relevance_cutoff: f64,
    /// Sentiment score strictly above this marks a record bullish.
    pub bullish_threshold: f64,
    /// Sentiment score strictly below the negation of this marks a record
    /// bearish.
    pub bearish_threshold: f64,
    /// Absolute sentiment score at or beyond this flags a record as a
    /// highlight (extreme sentiment).
    pub highlight_threshold: f64,
}

impl PipelineConfig {
    /// Configuration for `symbol` with the default policy thresholds.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            relevance_cutoff: 0.25,
            bullish_threshold: 0.15,
            bearish_threshold: 0.15,
            highlight_threshold: 0.5,
        }
    }

    /// Override the relevance cutoff.
    #[must_use]
    pub const fn with_relevance_cutoff(mut self, cutoff: f64) -> Self {
        self.relevance_cutoff = cutoff;
        self
    }

    /// Override the bullish threshold.
    #[must_use]
    pub const fn with_bullish_threshold(mut self, threshold: f64) -> Self {
        self.bullish_threshold = threshold;
        self
    }

    /// Override the bearish threshold.
    #[must_use]
    pub const fn with_bearish_threshold(mut self, threshold: f64) -> Self {
        self.bearish_threshold = threshold;
        self
    }

    /// Override the highlight threshold.
    #[must_use]
    pub const fn with_highlight_threshold(mut self, threshold: f64) -> Self {
        self.highlight_threshold = threshold;
        self
    }
}
