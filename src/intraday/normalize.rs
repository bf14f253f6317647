use chrono::NaiveDateTime;
use serde_json::Value;

use crate::core::{AvError, dedup::dedup_by_key};

use super::model::PriceRecord;
use super::wire::{BarNode, IntradayDocument};

/// Timestamp format of the raw series keys, e.g. `2024-03-18 10:05:00`.
const CLOSING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalizes raw intraday documents into sorted, deduplicated bars.
///
/// Each document is classified first: provider error payloads are skipped,
/// series payloads are flattened into one row per bar. Rows are then
/// deduplicated on closing time, keeping the first occurrence in document
/// order, and sorted ascending by closing time.
///
/// # Errors
///
/// Returns [`AvError::Schema`] when a document carries the `Meta Data`
/// marker but its series is missing or malformed, or when a bar's timestamp
/// or price fields fail to parse.
pub fn normalize_intraday<I>(documents: I) -> Result<Vec<PriceRecord>, AvError>
where
    I: IntoIterator<Item = Value>,
{
    let mut rows = Vec::new();
    for document in documents {
        match IntradayDocument::decode(&document)? {
            IntradayDocument::Series(bars) => {
                for (closing_time, bar) in bars {
                    rows.push(flatten_bar(&closing_time, bar)?);
                }
            }
            IntradayDocument::ErrorMessage => {}
        }
    }

    let mut rows = dedup_by_key(rows, |row: &PriceRecord| row.closing_time);
    rows.sort_by_key(|row| row.closing_time);
    Ok(rows)
}

fn flatten_bar(closing_time: &str, bar: BarNode) -> Result<PriceRecord, AvError> {
    let ts = NaiveDateTime::parse_from_str(closing_time, CLOSING_TIME_FORMAT).map_err(|e| {
        AvError::schema(
            "intraday",
            format!("unparseable closing time {closing_time:?}: {e}"),
        )
    })?;
    let open = parse_price(&bar.open, "1. open", closing_time)?;
    let close = parse_price(&bar.close, "4. close", closing_time)?;
    Ok(PriceRecord {
        closing_time: ts,
        open,
        high: bar.high,
        low: bar.low,
        close,
        volume: bar.volume,
        change: (close - open) / open,
    })
}

fn parse_price(raw: &str, field: &str, closing_time: &str) -> Result<f64, AvError> {
    raw.trim().parse::<f64>().map_err(|_| {
        AvError::schema(
            "intraday",
            format!("bar at {closing_time} has unparseable {field} value {raw:?}"),
        )
    })
}
