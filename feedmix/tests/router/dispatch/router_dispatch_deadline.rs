use std::sync::Arc;
use std::time::Duration;

use feedmix::{Feedmix, FeedConfig, Window};
use feedmix_mock::{DynamicMockProvider, MockBehavior};
use tokio::time::Instant;

use crate::helpers::{mix, sources};

fn slow(d: Duration) -> MockBehavior {
    MockBehavior::delayed(d, MockBehavior::Generate)
}

#[tokio::test(start_paused = true)]
async fn latency_is_bounded_by_one_deadline_however_many_providers_stall() {
    let keys = ["a", "b", "c", "d", "e", "f"];
    let mut builder = Feedmix::builder();
    for k in keys {
        let (p, _c) = DynamicMockProvider::with_behavior(k, slow(Duration::from_secs(30)));
        builder = builder.with_provider(p);
    }
    let rules: Vec<(&str, Option<&str>)> = keys.iter().map(|k| (*k, None)).collect();
    let feed = builder.mix(mix(&rules)).build().unwrap();

    let start = Instant::now();
    let out = feed.feed(Window::new(0, 12).unwrap(), "ip").await;
    let elapsed = start.elapsed();

    assert!(out.is_empty());
    assert!(elapsed >= FeedConfig::DEFAULT_PROVIDER_TIMEOUT, "{elapsed:?}");
    assert!(elapsed < FeedConfig::DEFAULT_PROVIDER_TIMEOUT * 2, "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn late_slow_provider_does_not_block_fast_one() {
    let (slow_p, _) = DynamicMockProvider::with_behavior("slow", MockBehavior::Hang);
    let (fast_p, _) =
        DynamicMockProvider::with_behavior("fast", slow(Duration::from_millis(1500)));
    let feed = Feedmix::builder()
        .with_provider(slow_p)
        .with_provider(fast_p)
        .mix(mix(&[("slow", Some("fast")), ("fast", None)]))
        .build()
        .unwrap();

    let start = Instant::now();
    let out = feed.feed(Window::new(0, 2).unwrap(), "ip").await;
    assert_eq!(sources(&out), ["fast", "fast"]);
    assert!(start.elapsed() < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn abandoned_fetch_never_delivers() {
    let (a, ca) = DynamicMockProvider::with_behavior("a", slow(Duration::from_secs(3)));
    let feed = Feedmix::builder()
        .with_provider(a)
        .mix(mix(&[("a", None)]))
        .build()
        .unwrap();

    let demand = feed.demand(Window::new(0, 2).unwrap());
    let mut queues = feed.dispatch(&demand, "ip").await;
    assert!(queues["a"].is_empty());

    // let the provider's own delay elapse; the aborted task must not complete
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(ca.calls().await.len(), 1);
    assert_eq!(ca.completed().await, 0);
    assert!(queues.get_mut("a").and_then(|q| q.pop()).is_none());
}

#[tokio::test(start_paused = true)]
async fn custom_deadline_is_honored() {
    let (a, _) = DynamicMockProvider::with_behavior("a", slow(Duration::from_millis(400)));
    let (b, _) = DynamicMockProvider::new_with_controller("b");
    let feed = Feedmix::builder()
        .with_provider(a)
        .with_provider(b)
        .mix(mix(&[("a", Some("b"))]))
        .provider_timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let start = Instant::now();
    let out = feed.feed(Window::new(0, 1).unwrap(), "ip").await;
    assert_eq!(sources(&out), ["b"]);
    assert!(start.elapsed() < Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_feed_future_cancels_in_flight_fetches() {
    let (a, ca) = DynamicMockProvider::with_behavior("a", slow(Duration::from_secs(60)));
    let (h, _) = DynamicMockProvider::with_behavior("h", MockBehavior::Hang);
    let hanging = Arc::downgrade(&h);
    let feed = Feedmix::builder()
        .with_provider(a)
        .with_provider(h)
        .mix(mix(&[("a", Some("h"))]))
        .build()
        .unwrap();

    // caller gives up well before the provider deadline
    let res = tokio::time::timeout(
        Duration::from_millis(100),
        feed.feed(Window::new(0, 1).unwrap(), "ip"),
    )
    .await;
    assert!(res.is_err());
    drop(feed);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(ca.calls().await.len(), 1);
    assert_eq!(ca.completed().await, 0);
    assert!(hanging.upgrade().is_none(), "hanging fetch still holds its provider");
}
