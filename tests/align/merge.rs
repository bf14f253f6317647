use av_align::{NewsRecord, PriceRecord, TopicScores, merge_asof};
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

#[test]
fn every_bar_gets_the_most_recent_prior_news() {
    let prices = vec![price(10, 0), price(10, 5), price(10, 10)];
    let news = vec![news(10, 5, 0.3)];

    let aligned = merge_asof(prices, &news);

    assert_eq!(aligned.len(), 3);
    assert!(aligned[0].news.is_none());
    assert_eq!(aligned[1].news.as_ref().unwrap().formatted_time, at(10, 5));
    assert_eq!(aligned[2].news.as_ref().unwrap().formatted_time, at(10, 5));
}

#[test]
fn empty_news_preserves_every_bar() {
    let prices = vec![price(10, 0), price(10, 5)];

    let aligned = merge_asof(prices, &[]);

    assert_eq!(aligned.len(), 2);
    assert!(aligned.iter().all(|row| row.news.is_none()));
}

#[test]
fn empty_prices_yield_empty_output() {
    let aligned = merge_asof(Vec::new(), &[news(10, 5, 0.3)]);
    assert!(aligned.is_empty());
}

#[test]
fn stale_news_persists_until_superseded() {
    let prices = vec![
        price(10, 5),
        price(10, 10),
        price(10, 15),
        price(10, 20),
        price(10, 25),
    ];
    let news = vec![news(10, 5, 0.1), news(10, 20, 0.9)];

    let aligned = merge_asof(prices, &news);

    let attached: Vec<_> = aligned
        .iter()
        .map(|row| row.news.as_ref().unwrap().formatted_time)
        .collect();
    assert_eq!(
        attached,
        vec![at(10, 5), at(10, 5), at(10, 5), at(10, 20), at(10, 20)]
    );
}

#[test]
fn future_news_never_attaches() {
    let aligned = merge_asof(vec![price(10, 5)], &[news(10, 10, 0.9)]);
    assert!(aligned[0].news.is_none());
}

#[test]
fn simultaneous_news_resolves_to_the_last_in_input_order() {
    let prices = vec![price(10, 5)];
    let news = vec![news(10, 5, 0.1), news(10, 5, 0.9)];

    let aligned = merge_asof(prices, &news);

    let attached = aligned[0].news.as_ref().unwrap();
    assert!((attached.ticker_sentiment_score - 0.9).abs() < 1e-12);
}

#[test]
fn aligned_rows_serialize_flat() {
    let aligned = merge_asof(vec![price(10, 0), price(10, 5)], &[news(10, 5, 0.3)]);

    let bare = serde_json::to_value(&aligned[0]).unwrap();
    assert_eq!(bare["volume"], "2011547");
    assert!(bare.get("ticker").is_none());
    assert!(bare.get("Technology").is_none());

    let joined = serde_json::to_value(&aligned[1]).unwrap();
    assert_eq!(joined["volume"], "2011547");
    assert_eq!(joined["ticker"], "AAPL");
    assert_eq!(joined["Technology"], serde_json::json!(0.0));
}
