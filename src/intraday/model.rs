use chrono::NaiveDateTime;
use serde::Serialize;

/// One normalized 5 minute bar.
///
/// `closing_time` is the key the raw series map uses for the bar and the key
/// deduplication and the as-of merge run on. Open and close are parsed so the
/// relative change can be derived; high, low and volume are retained exactly
/// as the provider serves them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRecord {
    /// Closing timestamp of the bar (exchange local, naive).
    pub closing_time: NaiveDateTime,
    /// Opening price of the bar.
    pub open: f64,
    /// Highest price of the bar, as served.
    pub high: String,
    /// Lowest price of the bar, as served.
    pub low: String,
    /// Closing price of the bar.
    pub close: f64,
    /// Share volume of the bar, as served.
    pub volume: String,
    /// Relative change over the bar, `(close - open) / open`.
    pub change: f64,
}
