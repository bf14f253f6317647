use av_align::{AvClient, Collector, JsonlStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client. AV_API_KEY falls back to the throttled demo key.
    let api_key = std::env::var("AV_API_KEY").unwrap_or_else(|_| "demo".to_string());
    let client = AvClient::new(api_key)?;

    // 2. One collection cycle: both feeds, appended raw to the stores.
    let news_store = JsonlStore::new("news.jsonl");
    let intraday_store = JsonlStore::new("intraday.jsonl");
    let collector = Collector::new(
        &client,
        "AAPL",
        news_store.clone(),
        intraday_store.clone(),
    );

    collector.poll_once().await?;

    println!(
        "collected: {} news documents, {} intraday documents",
        news_store.documents()?.len(),
        intraday_store.documents()?.len()
    );
    println!("run the align demo to turn the stores into the aligned table");
    Ok(())
}
