use serde_json::Value;

use crate::core::{AvClient, AvError, net};

pub(super) async fn fetch_news(
    client: &AvClient,
    symbol: &str,
    limit: Option<u32>,
) -> Result<Value, AvError> {
    let mut url = client.base_query().clone();
    url.query_pairs_mut()
        .append_pair("function", "NEWS_SENTIMENT")
        .append_pair("tickers", symbol)
        .append_pair("apikey", client.api_key());
    if let Some(limit) = limit {
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
    }

    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(AvError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp, "news_sentiment", symbol, "json").await?;
    let document: Value = serde_json::from_str(&body)?;
    Ok(document)
}
