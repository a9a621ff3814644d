use feedmix::{Feedmix, ProviderKey, Window};
use feedmix_mock::{DynamicMockProvider, FetchCall, MockBehavior};

use crate::helpers::{P1, P2, P3};

#[tokio::test]
async fn one_fetch_per_provider_sized_by_demand() {
    let (p1, c1) = DynamicMockProvider::new_with_controller(P1);
    let (p2, c2) = DynamicMockProvider::new_with_controller(P2);
    let (p3, c3) = DynamicMockProvider::new_with_controller(P3);
    let feed = Feedmix::builder()
        .with_provider(p1)
        .with_provider(p2)
        .with_provider(p3)
        .build()
        .unwrap();

    let out = feed.feed(Window::new(0, 5).unwrap(), "8.8.8.8").await;
    assert_eq!(out.len(), 5);

    let call = |count| {
        vec![FetchCall {
            identity: "8.8.8.8".to_string(),
            count,
        }]
    };
    assert_eq!(c1.calls().await, call(4));
    assert_eq!(c2.calls().await, call(3));
    assert_eq!(c3.calls().await, call(2));
}

#[tokio::test]
async fn providers_outside_the_window_are_not_called() {
    let (a, ca) = DynamicMockProvider::new_with_controller("a");
    let (b, cb) = DynamicMockProvider::new_with_controller("b");
    let feed = Feedmix::builder()
        .with_provider(a)
        .with_provider(b)
        .mix(crate::helpers::mix(&[("a", None), ("a", None), ("b", None)]))
        .build()
        .unwrap();

    // positions 3 and 4 both map to "a"
    let out = feed.feed(Window::new(3, 2).unwrap(), "ip").await;
    assert_eq!(out.len(), 2);
    assert_eq!(ca.calls().await.len(), 1);
    assert!(cb.calls().await.is_empty());
}

#[tokio::test]
async fn failed_provider_gets_an_empty_queue() {
    let (a, _ca) = DynamicMockProvider::with_behavior(
        "a",
        MockBehavior::Fail(feedmix::FeedError::connector("a", "boom")),
    );
    let (b, _cb) = DynamicMockProvider::new_with_controller("b");
    let feed = Feedmix::builder()
        .with_provider(a)
        .with_provider(b)
        .mix(crate::helpers::mix(&[("a", Some("b"))]))
        .build()
        .unwrap();

    let demand = feed.demand(Window::new(0, 2).unwrap());
    let queues = feed.dispatch(&demand, "ip").await;
    assert_eq!(queues.len(), 2);
    assert!(queues[&ProviderKey::new("a")].is_empty());
    assert_eq!(queues[&ProviderKey::new("b")].len(), 2);
}
