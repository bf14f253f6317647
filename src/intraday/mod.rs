mod api;
mod model;
mod normalize;
pub(crate) mod wire;

pub use model::PriceRecord;
pub use normalize::normalize_intraday;

use serde_json::Value;

use crate::core::{AvClient, AvError};

/// Bar width of an intraday series.
///
/// The alignment pipeline stores and consumes 5 minute documents; the other
/// widths are exposed for callers polling the endpoint directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    I1m,
    I5m,
    I15m,
    I30m,
    I60m,
}

impl Interval {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1min",
            Interval::I5m => "5min",
            Interval::I15m => "15min",
            Interval::I30m => "30min",
            Interval::I60m => "60min",
        }
    }
}

/// How much of the series the endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSize {
    /// The latest 100 bars.
    Compact,
    /// The full trailing history for the symbol.
    Full,
}

impl OutputSize {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// A builder for polling the intraday series for a symbol.
///
/// `fetch` returns the raw polling document exactly as served, error
/// payloads included, mirroring [`NewsBuilder`](crate::news::NewsBuilder).
/// Defaults match the pipeline's storage contract: 5 minute bars, regular
/// trading hours only.
pub struct IntradayBuilder {
    client: AvClient,
    symbol: String,
    interval: Interval,
    extended_hours: bool,
    output_size: Option<OutputSize>,
}

impl IntradayBuilder {
    /// Creates a new `IntradayBuilder` for a given symbol.
    pub fn new(client: &AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            interval: Interval::I5m,
            extended_hours: false,
            output_size: None,
        }
    }

    /// Set the bar width of the series.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Include pre-market and after-hours bars.
    #[must_use]
    pub const fn extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = extended_hours;
        self
    }

    /// Ask for the full trailing history instead of the latest 100 bars.
    #[must_use]
    pub const fn output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = Some(output_size);
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
        api::fetch_intraday(
            &self.client,
            &self.symbol,
            self.interval,
            self.extended_hours,
            self.output_size,
        )
        .await
    }
}
