use feedmix::{ContentMix, Feedmix, Window};

use crate::helpers::{MockProvider, P1, P2, P3, sources};

fn default_feed() -> Feedmix {
    Feedmix::builder()
        .with_provider(MockProvider::builder().name(P1).build())
        .with_provider(MockProvider::builder().name(P2).build())
        .with_provider(MockProvider::builder().name(P3).build())
        .build()
        .unwrap()
}

#[tokio::test]
async fn first_five_follow_default_mix() {
    let feed = default_feed();
    let out = feed.feed(Window::new(0, 5).unwrap(), "192.168.0.1").await;
    assert_eq!(sources(&out), [P1, P1, P2, P3, P1]);
}

#[tokio::test]
async fn offset_window_wraps_the_cycle() {
    let feed = default_feed();
    let out = feed.feed(Window::new(5, 5).unwrap(), "192.168.0.1").await;
    // positions 5, 6, 7, 0, 1
    assert_eq!(sources(&out), [P1, P1, P2, P1, P1]);
}

#[tokio::test]
async fn long_window_matches_primaries_everywhere() {
    let feed = default_feed();
    let mix = ContentMix::default();
    let out = feed.feed(Window::new(3, 21).unwrap(), "192.168.0.1").await;
    assert_eq!(out.len(), 21);
    for (j, item) in out.iter().enumerate() {
        assert_eq!(
            item.source,
            mix.rule_at(3 + j).primary.as_str(),
            "position {}",
            3 + j
        );
    }
}

#[tokio::test]
async fn items_from_one_provider_keep_provider_order() {
    let feed = default_feed();
    let out = feed.feed(Window::new(0, 8).unwrap(), "ip").await;
    let p1_ids: Vec<&str> = out
        .iter()
        .filter(|i| i.source == P1)
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(p1_ids, ["1#0", "1#1", "1#2", "1#3", "1#4"]);
}

#[tokio::test]
async fn empty_window_contacts_nobody() {
    let p1 = MockProvider::builder().name(P1).build();
    let feed = Feedmix::builder()
        .with_provider(p1.clone())
        .with_provider(MockProvider::builder().name(P2).build())
        .with_provider(MockProvider::builder().name(P3).build())
        .build()
        .unwrap();
    let out = feed.feed(Window::new(7, 0).unwrap(), "ip").await;
    assert!(out.is_empty());
    assert_eq!(p1.fetch_count(), 0);
}
