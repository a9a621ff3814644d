use std::time::Duration;

use feedmix::{ContentMix, FeedConfig, FeedError, Feedmix};

use crate::helpers::{MockProvider, P1, P2, P3, mix};

#[test]
fn build_requires_a_provider() {
    let err = Feedmix::builder().build().err().expect("error");
    assert!(matches!(err, FeedError::InvalidArg(_)));
}

#[test]
fn build_rejects_mix_with_unregistered_provider() {
    let err = Feedmix::builder()
        .with_provider(MockProvider::builder().name(P1).build())
        .with_provider(MockProvider::builder().name(P2).build())
        .build()
        .err()
        .expect("default mix also needs provider 3");
    assert_eq!(err, FeedError::UnknownProvider(P3.to_string()));
}

#[test]
fn build_rejects_unregistered_fallback() {
    let err = Feedmix::builder()
        .with_provider(MockProvider::builder().name("a").build())
        .mix(mix(&[("a", Some("b"))]))
        .build()
        .err()
        .expect("fallback b is unknown");
    assert_eq!(err, FeedError::UnknownProvider("b".to_string()));
}

#[test]
fn build_rejects_duplicate_keys() {
    let err = Feedmix::builder()
        .with_provider(MockProvider::builder().name("a").build())
        .with_provider(MockProvider::builder().name("a").build())
        .mix(mix(&[("a", None)]))
        .build()
        .err()
        .expect("duplicate");
    assert!(matches!(err, FeedError::InvalidArg(_)));
}

#[test]
fn defaults_and_overrides() {
    let feed = Feedmix::builder()
        .with_provider(MockProvider::builder().name(P1).build())
        .with_provider(MockProvider::builder().name(P2).build())
        .with_provider(MockProvider::builder().name(P3).build())
        .build()
        .expect("default mix is satisfied");
    assert_eq!(feed.mix(), &ContentMix::default());
    assert_eq!(feed.config(), &FeedConfig::default());
    assert!(feed.provider(&P1.into()).is_some());

    let feed = Feedmix::builder()
        .with_provider(MockProvider::builder().name("a").build())
        .mix(mix(&[("a", None)]))
        .provider_timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    assert_eq!(feed.config().provider_timeout, Duration::from_millis(250));
}

#[test]
fn unused_providers_are_allowed() {
    let feed = Feedmix::builder()
        .with_provider(MockProvider::builder().name("a").build())
        .with_provider(MockProvider::builder().name("spare").build())
        .mix(mix(&[("a", None)]))
        .build();
    assert!(feed.is_ok());
}
