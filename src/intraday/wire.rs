use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::core::AvError;

/* ----- raw polling document ----- */

/// One bar keyed by its closing timestamp in the raw series map.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BarNode {
    #[serde(rename = "1. open")]
    pub(crate) open: String,
    #[serde(rename = "2. high")]
    pub(crate) high: String,
    #[serde(rename = "3. low")]
    pub(crate) low: String,
    #[serde(rename = "4. close")]
    pub(crate) close: String,
    #[serde(rename = "5. volume")]
    pub(crate) volume: String,
}

/// A stored intraday document, classified by its `Meta Data` marker.
pub(crate) enum IntradayDocument {
    /// A well formed series payload, keyed by closing timestamp.
    Series(BTreeMap<String, BarNode>),
    /// A provider error or notice payload. Skipped by normalization.
    ErrorMessage,
}

impl IntradayDocument {
    /// Classifies a raw document.
    ///
    /// Documents without the `Meta Data` key are provider error payloads and
    /// decode to [`IntradayDocument::ErrorMessage`]. The marker counts as
    /// present whenever the key exists, whatever its value; the metadata
    /// contents are never read. Once the marker is present the series map
    /// must be present and well formed; anything else is a schema violation.
    pub(crate) fn decode(document: &Value) -> Result<IntradayDocument, AvError> {
        let Some(object) = document.as_object() else {
            return Ok(IntradayDocument::ErrorMessage);
        };
        if !object.contains_key("Meta Data") {
            return Ok(IntradayDocument::ErrorMessage);
        }
        let Some(series) = object.get("Time Series (5min)") else {
            return Err(AvError::schema(
                "intraday",
                "Meta Data present but Time Series (5min) is missing",
            ));
        };
        let bars = BTreeMap::<String, BarNode>::deserialize(series).map_err(|e| {
            AvError::schema(
                "intraday",
                format!("time series does not match the bar schema: {e}"),
            )
        })?;
        Ok(IntradayDocument::Series(bars))
    }
}
