//! Integration tests for `TrendAggregator::collect`.
//!
//! Each test stands up a `wiremock` server in place of the RSS feeds so no
//! real network traffic is made. Covers merge order, failure isolation,
//! timeouts, and the dedupe/limit rules applied to the merged list.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ideaforge_trends::{TrendAggregator, TrendSource};

fn rss(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .map(|t| format!("<item><title>{t}</title></item>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Feed</title>{items}</channel></rss>"#
    )
}

fn seeded(name: &str, topics: &[&str]) -> TrendSource {
    TrendSource::Seeded {
        name: name.to_string(),
        topics: topics.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn aggregator(sources: Vec<TrendSource>) -> TrendAggregator {
    TrendAggregator::new(reqwest::Client::new(), sources)
        .with_baseline(vec!["self care".to_string()])
        .with_source_timeout(Duration::from_secs(5))
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collect_merges_baseline_then_sources_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&["World Cup!", "Solar Eclipse"])))
        .mount(&server)
        .await;

    let trends = aggregator(vec![
        TrendSource::GoogleTrends {
            feed_urls: vec![format!("{}/trends", server.uri())],
        },
        seeded("tiktok_formats", &["Mini Vlog"]),
    ])
    .collect()
    .await;

    assert_eq!(
        trends,
        vec![
            "self care".to_string(),
            "world cup".to_string(),
            "solar eclipse".to_string(),
            "mini vlog".to_string(),
        ]
    );
}

#[tokio::test]
async fn collect_extracts_keywords_from_news_headlines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(rss(&["Quantum chips reach record speed", "Big news day"])),
        )
        .mount(&server)
        .await;

    let trends = aggregator(vec![TrendSource::NewsHeadlines {
        feed_urls: vec![format!("{}/news", server.uri())],
    }])
    .collect()
    .await;

    assert!(trends.contains(&"quantum".to_string()));
    assert!(trends.contains(&"record".to_string()));
    assert!(!trends.contains(&"news".to_string()));
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_source_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let trends = aggregator(vec![
        TrendSource::GoogleTrends {
            feed_urls: vec![format!("{}/trends", server.uri())],
        },
        seeded("youtube_formats", &["tier list"]),
    ])
    .collect()
    .await;

    assert_eq!(trends, vec!["self care".to_string(), "tier list".to_string()]);
}

#[tokio::test]
async fn malformed_feed_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<rss><channel><item><title>Broken</wrong></item>"),
        )
        .mount(&server)
        .await;

    let trends = aggregator(vec![TrendSource::GoogleTrends {
        feed_urls: vec![format!("{}/trends", server.uri())],
    }])
    .collect()
    .await;

    assert_eq!(trends, vec!["self care".to_string()]);
}

#[tokio::test]
async fn one_good_feed_is_enough_for_a_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/up"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rss(&["Eclipse"])))
        .mount(&server)
        .await;

    let trends = aggregator(vec![TrendSource::GoogleTrends {
        feed_urls: vec![
            format!("{}/down", server.uri()),
            format!("{}/up", server.uri()),
        ],
    }])
    .collect()
    .await;

    assert_eq!(trends, vec!["self care".to_string(), "eclipse".to_string()]);
}

#[tokio::test]
async fn slow_source_times_out_without_blocking_others() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(rss(&["Too Late"]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let trends = aggregator(vec![
        TrendSource::GoogleTrends {
            feed_urls: vec![format!("{}/slow", server.uri())],
        },
        seeded("tiktok_formats", &["glow up"]),
    ])
    .with_source_timeout(Duration::from_millis(200))
    .collect()
    .await;

    assert_eq!(trends, vec!["self care".to_string(), "glow up".to_string()]);
}

#[tokio::test]
async fn all_sources_failing_leaves_baseline() {
    let trends = aggregator(vec![TrendSource::NewsHeadlines {
        feed_urls: vec!["http://127.0.0.1:9/unreachable".to_string()],
    }])
    .collect()
    .await;

    assert_eq!(trends, vec!["self care".to_string()]);
}

// ---------------------------------------------------------------------------
// Merge rules
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicates_across_sources_collapse_to_first() {
    let trends = aggregator(vec![
        seeded("youtube_formats", &["Self Care!", "day in my life"]),
        seeded("tiktok_formats", &["Day in my life", "ok"]),
    ])
    .collect()
    .await;

    assert_eq!(
        trends,
        vec!["self care".to_string(), "day in my life".to_string()]
    );
}

#[tokio::test]
async fn merged_list_is_capped() {
    let topics: Vec<String> = (0..20).map(|i| format!("topic {i}")).collect();
    let refs: Vec<&str> = topics.iter().map(String::as_str).collect();

    let trends = aggregator(vec![seeded("many", &refs)])
        .with_max_trends(5)
        .collect()
        .await;

    assert_eq!(trends.len(), 5);
    assert_eq!(trends[0], "self care");
    assert_eq!(trends[4], "topic 3");
}

#[tokio::test]
async fn serial_fetching_keeps_source_order() {
    let trends = aggregator(vec![
        seeded("first", &["alpha"]),
        seeded("second", &["bravo"]),
        seeded("third", &["charlie"]),
    ])
    .with_max_concurrent(1)
    .collect()
    .await;

    assert_eq!(
        trends,
        vec![
            "self care".to_string(),
            "alpha".to_string(),
            "bravo".to_string(),
            "charlie".to_string(),
        ]
    );
}

#[tokio::test]
async fn sources_are_fetched_concurrently_and_merged_in_declared_order() {
    let server = MockServer::start().await;
    // Slowest first, so completion order is the reverse of declared order.
    for (route, title, delay_ms) in [
        ("/slow", "Alpha Feed", 450),
        ("/medium", "Bravo Feed", 400),
        ("/fast", "Charlie Feed", 350),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(rss(&[title]))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let feed = |route: &str| TrendSource::GoogleTrends {
        feed_urls: vec![format!("{}{route}", server.uri())],
    };
    let aggregator = aggregator(vec![feed("/slow"), feed("/medium"), feed("/fast")]);

    let started = tokio::time::Instant::now();
    let trends = aggregator.collect().await;
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_millis(1000),
        "three delayed feeds took {elapsed:?}; fetched one at a time?"
    );
    assert_eq!(
        trends,
        vec![
            "self care".to_string(),
            "alpha feed".to_string(),
            "bravo feed".to_string(),
            "charlie feed".to_string(),
        ]
    );
}
