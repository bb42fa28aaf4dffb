// StatsCollector and CachedCollector behavior against a scripted engine

mod common;

use common::{MockSource, Outcome, collector, snapshot};
use dockmon::collector::CachedCollector;
use dockmon::error::{CollectError, SampleError};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn collect_with_no_running_containers_is_empty_not_error() {
    let source = Arc::new(MockSource::new());
    let batch = collector(source).collect().await.expect("collect");
    assert!(batch.is_empty());
}

#[tokio::test]
async fn collect_skips_failed_container_and_keeps_the_rest() {
    let source = Arc::new(
        MockSource::new()
            .with("aaaaaaaaaaaaaaaa", Some("first"), Outcome::Ok(snapshot(10, 100)))
            .with("bbbbbbbbbbbbbbbb", Some("second"), Outcome::Fail)
            .with("cccccccccccccccc", Some("third"), Outcome::Ok(snapshot(20, 100))),
    );
    let report = collector(source.clone()).collect_report().await.expect("collect");

    assert_eq!(report.metrics.len(), 2);
    assert_eq!(report.metrics[0].name, "first");
    assert_eq!(report.metrics[1].name, "third");
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].container_id, "bbbbbbbbbbbb");
    assert!(matches!(report.failures[0].error, SampleError::Fetch(_)));

    let batch = collector(source).collect().await.expect("collect");
    assert_eq!(batch.len(), 2);
}

#[tokio::test]
async fn collect_fails_when_listing_fails() {
    let source = Arc::new(MockSource::unreachable());
    let err = collector(source).collect().await.unwrap_err();
    assert!(matches!(err, CollectError::EngineUnreachable(_)));
    assert!(err.to_string().contains("failed to list containers"));
}

#[tokio::test]
async fn collect_preserves_listing_order() {
    let ids = ["zz00000000000000", "aa00000000000000", "mm00000000000000"];
    let mut source = MockSource::new();
    for id in ids {
        source = source.with(id, None, Outcome::Ok(snapshot(1, 2)));
    }
    let batch = collector(Arc::new(source)).collect().await.expect("collect");
    let got: Vec<&str> = batch.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(got, vec!["zz0000000000", "aa0000000000", "mm0000000000"]);
}

#[tokio::test]
async fn collect_derives_metrics_per_container() {
    let source = Arc::new(MockSource::new().with(
        "0123456789abcdef",
        None,
        Outcome::Ok(snapshot(104_857_600, 2_147_483_648)),
    ));
    let batch = collector(source).collect().await.expect("collect");
    let m = &batch[0];
    assert_eq!(m.id, "0123456789ab");
    assert_eq!(m.name, "0123456789ab");
    assert!((m.cpu_percent - 50.0).abs() < 1e-9);
    assert!((m.memory_percent - 4.8828125).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn collect_times_out_unresponsive_container() {
    let source = Arc::new(
        MockSource::new()
            .with("slow000000000000", Some("slow"), Outcome::Hang)
            .with("fast000000000000", Some("fast"), Outcome::Ok(snapshot(1, 2))),
    );
    let report = collector(source).collect_report().await.expect("collect");
    assert_eq!(report.metrics.len(), 1);
    assert_eq!(report.metrics[0].name, "fast");
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].container_id, "slow00000000");
    assert!(matches!(report.failures[0].error, SampleError::Timeout(_)));
}

#[tokio::test]
async fn cached_collector_with_zero_window_polls_every_time() {
    let source = Arc::new(MockSource::new());
    let cached = CachedCollector::new(collector(source.clone()), Duration::ZERO);
    cached.collect().await.unwrap();
    cached.collect().await.unwrap();
    assert_eq!(source.list_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn cached_collector_coalesces_within_window() {
    let source = Arc::new(MockSource::new().with(
        "a000000000000000",
        None,
        Outcome::Ok(snapshot(1, 2)),
    ));
    let cached = Arc::new(CachedCollector::new(
        collector(source.clone()),
        Duration::from_millis(500),
    ));

    let (a, b) = tokio::join!(cached.collect(), cached.collect());
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(source.list_calls(), 1);

    tokio::time::advance(Duration::from_millis(600)).await;
    cached.collect().await.unwrap();
    assert_eq!(source.list_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn cached_collector_does_not_cache_failures() {
    let source = Arc::new(MockSource::unreachable());
    let cached = CachedCollector::new(collector(source.clone()), Duration::from_secs(10));
    assert!(cached.collect().await.is_err());
    assert!(cached.collect().await.is_err());
    assert_eq!(source.list_calls(), 2);
}
