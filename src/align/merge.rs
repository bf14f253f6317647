use crate::intraday::PriceRecord;
use crate::news::NewsRecord;

use super::model::AlignedRecord;

/// Backward as-of join of news onto prices.
///
/// For every price row, attaches the news row with the greatest
/// `formatted_time` that is less than or equal to the bar's `closing_time`,
/// or nothing when no news has been published yet. A stale news row keeps
/// being attached to consecutive bars until a newer one supersedes it.
///
/// Both inputs must already be sorted ascending on their time key, which is
/// what [`normalize_news`](crate::news::normalize_news) and
/// [`normalize_intraday`](crate::intraday::normalize_intraday) produce.
/// When several news rows share the same `formatted_time`, the one latest in
/// input order wins.
///
/// The output has exactly one row per input price row, in the same order.
/// News rows never duplicate or drop price rows.
#[must_use]
pub fn merge_asof(prices: Vec<PriceRecord>, news: &[NewsRecord]) -> Vec<AlignedRecord> {
    let mut aligned = Vec::with_capacity(prices.len());
    let mut next = 0usize;
    for price in prices {
        while next < news.len() && news[next].formatted_time <= price.closing_time {
            next += 1;
        }
        aligned.push(AlignedRecord {
            news: (next > 0).then(|| news[next - 1].clone()),
            price,
        });
    }
    aligned
}
