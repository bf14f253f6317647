//! av-align: normalization and backward as-of alignment of Alpha Vantage
//! news sentiment with intraday prices.
//!
//! Raw polling documents go in, error payloads included; one aligned table
//! comes out. Each row is a 5 minute price bar carrying the most recent
//! news published at or before the bar's close, plus sentiment predicates
//! over the result.

pub mod align;
pub mod collector;
pub mod core;
pub mod intraday;
pub mod news;
pub mod pipeline;
pub mod store;

pub use crate::core::{AvClient, AvClientBuilder, AvError, PipelineConfig};

pub use align::{AlignedRecord, merge_asof};
pub use collector::Collector;
pub use intraday::{Interval, IntradayBuilder, OutputSize, PriceRecord, normalize_intraday};
pub use news::{NewsBuilder, NewsRecord, Topic, TopicScores, normalize_news};
pub use pipeline::Pipeline;
pub use store::JsonlStore;
