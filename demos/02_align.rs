use av_align::{JsonlStore, Pipeline, PipelineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Read back whatever the collect demo has accumulated so far.
    let news_store = JsonlStore::new("news.jsonl");
    let intraday_store = JsonlStore::new("intraday.jsonl");

    // 2. Normalize both feeds and join news onto prices backward as-of.
    let config = PipelineConfig::new("AAPL");
    let pipeline = Pipeline::new(config.clone());
    let aligned = pipeline.run_from_stores(&news_store, &intraday_store)?;

    println!("--- Aligned table ({} bars) ---", aligned.len());
    for row in &aligned {
        let sentiment = match row.sentiment_score() {
            Some(score) => format!("{score:+.4}"),
            None => "   none".to_string(),
        };
        let mut flags = String::new();
        if row.is_highlight(&config) {
            flags.push('!');
        }
        if row.is_bullish(&config) {
            flags.push('+');
        }
        if row.is_bearish(&config) {
            flags.push('-');
        }
        println!(
            "{}  close {:>9.4}  change {:+.5}  sentiment {sentiment} {flags}",
            row.price.closing_time, row.price.close, row.price.change
        );
    }
    Ok(())
}
