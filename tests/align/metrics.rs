use av_align::{NewsRecord, PipelineConfig, PriceRecord, TopicScores, merge_asof};
use chrono::NaiveDate;

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 18)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn price(h: u32, m: u32) -> PriceRecord {
    PriceRecord {
        closing_time: at(h, m),
        open: 172.45,
        high: "173.0900".to_string(),
        low: "172.4100".to_string(),
        close: 173.01,
        volume: "2011547".to_string(),
        change: (173.01 - 172.45) / 172.45,
    }
}

fn news(h: u32, m: u32, score: f64) -> NewsRecord {
    NewsRecord {
        time_published: format!("20240318T{h:02}{m:02}00"),
        authors: "Alice Smith".to_string(),
        title: format!("News at {h:02}:{m:02}"),
        summary: "Summary.".to_string(),
        source: "Benzinga".to_string(),
        ticker: "AAPL".to_string(),
        relevance_score: 0.65,
        ticker_sentiment_score: score,
        ticker_sentiment_label: "Neutral".to_string(),
        topics: TopicScores::default(),
        formatted_time: at(h, m),
    }
}

/// One aligned row whose attached news carries `score`.
fn aligned_with(score: f64) -> av_align::AlignedRecord {
    merge_asof(vec![price(10, 5)], &[news(10, 5, score)])
        .pop()
        .unwrap()
}

#[test]
fn sentiment_score_comes_from_the_attached_news() {
    let config = PipelineConfig::new("AAPL");

    let row = aligned_with(0.31);
    assert!((row.sentiment_score().unwrap() - 0.31).abs() < 1e-12);

    let bare = merge_asof(vec![price(10, 0)], &[]).pop().unwrap();
    assert!(bare.sentiment_score().is_none());
    assert!(!bare.is_highlight(&config));
    assert!(!bare.is_bullish(&config));
    assert!(!bare.is_bearish(&config));
}

#[test]
fn highlight_is_inclusive_at_the_threshold() {
    let config = PipelineConfig::new("AAPL");

    assert!(aligned_with(0.5).is_highlight(&config));
    assert!(aligned_with(-0.5).is_highlight(&config));
    assert!(aligned_with(0.82).is_highlight(&config));
    assert!(!aligned_with(0.49).is_highlight(&config));
    assert!(!aligned_with(-0.49).is_highlight(&config));
}

#[test]
fn bullish_is_strictly_above_the_threshold() {
    let config = PipelineConfig::new("AAPL");

    assert!(!aligned_with(0.15).is_bullish(&config));
    assert!(aligned_with(0.150001).is_bullish(&config));
    assert!(aligned_with(0.9).is_bullish(&config));
    assert!(!aligned_with(-0.9).is_bullish(&config));
}

#[test]
fn bearish_is_strictly_below_the_negated_threshold() {
    let config = PipelineConfig::new("AAPL");

    assert!(!aligned_with(-0.15).is_bearish(&config));
    assert!(aligned_with(-0.150001).is_bearish(&config));
    assert!(aligned_with(-0.9).is_bearish(&config));
    assert!(!aligned_with(0.9).is_bearish(&config));
}

#[test]
fn thresholds_come_from_the_configuration() {
    let config = PipelineConfig::new("AAPL")
        .with_highlight_threshold(0.8)
        .with_bullish_threshold(0.05)
        .with_bearish_threshold(0.05);

    assert!(!aligned_with(0.5).is_highlight(&config));
    assert!(aligned_with(0.8).is_highlight(&config));
    assert!(aligned_with(0.06).is_bullish(&config));
    assert!(aligned_with(-0.06).is_bearish(&config));
}
