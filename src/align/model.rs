use serde::Serialize;

use crate::intraday::PriceRecord;
use crate::news::NewsRecord;

/// One bar of the aligned table: a price row plus the most recent news row
/// published at or before the bar's close, when one exists.
///
/// Serializes flat, as the union of the two schemas. Rows without an
/// eligible news record serialize the price fields only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedRecord {
    #[serde(flatten)]
    pub price: PriceRecord,
    #[serde(flatten)]
    pub news: Option<NewsRecord>,
}
