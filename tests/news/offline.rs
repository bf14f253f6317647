use av_align::{AvError, NewsBuilder};
use httpmock::Method::GET;
use serde_json::Value;

#[tokio::test]
async fn offline_news_fetch_returns_raw_document() {
    let server = crate::common::setup_server();
    let sym = "AAPL";
    let mock = crate::common::mock_news_sentiment(&server, sym);

    let client = crate::common::test_client(&server);
    let document: Value = NewsBuilder::new(&client, sym).fetch().await.unwrap();

    mock.assert();

    // The builder must not normalize anything; the document is the payload
    // exactly as served.
    let feed = document["feed"].as_array().expect("feed array");
    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0]["source"], "Benzinga");
    assert_eq!(feed[0]["ticker_sentiment"][0]["ticker"], "AAPL");
}

#[tokio::test]
async fn offline_news_builder_configures_request() {
    let server = crate::common::setup_server();
    let sym = "AAPL";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("tickers", sym)
            .query_param("limit", "200")
            .query_param("apikey", "TESTKEY");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("news_sentiment", sym, "json"));
    });

    let client = crate::common::test_client(&server);
    let _ = NewsBuilder::new(&client, sym)
        .limit(200)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn offline_news_http_error_maps_to_status() {
    let server = crate::common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(503).body("service unavailable");
    });

    let client = crate::common::test_client(&server);
    let err = NewsBuilder::new(&client, "AAPL")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        AvError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("expected a status error, got {other}"),
    }
}
