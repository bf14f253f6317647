use serde_json::Value;

use crate::core::{AvClient, AvError, net};

use super::{Interval, OutputSize};

pub(super) async fn fetch_intraday(
    client: &AvClient,
    symbol: &str,
    interval: Interval,
    extended_hours: bool,
    output_size: Option<OutputSize>,
) -> Result<Value, AvError> {
    let mut url = client.base_query().clone();
    url.query_pairs_mut()
        .append_pair("function", "TIME_SERIES_INTRADAY")
        .append_pair("symbol", symbol)
        .append_pair("interval", interval.as_str())
        .append_pair("extended_hours", if extended_hours { "true" } else { "false" })
        .append_pair("apikey", client.api_key());
    if let Some(output_size) = output_size {
        url.query_pairs_mut()
            .append_pair("outputsize", output_size.as_str());
    }

    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(AvError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp, &format!("intraday_{}", interval.as_str()), symbol, "json").await?;
    let document: Value = serde_json::from_str(&body)?;
    Ok(document)
}
