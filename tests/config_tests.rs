//! Allocation policy configuration.

use seqkit::config::{exact_len, SeqConfig};
use seqkit::Error;

#[test]
fn test_defaults_round_trip_through_json() {
    let cfg = SeqConfig::default();
    let json = serde_json::to_string(&cfg).expect("serialize");
    let back = SeqConfig::from_json(&json).expect("parse");
    assert_eq!(back, cfg);
}

#[test]
fn test_invalid_json_maps_to_config_error() {
    match SeqConfig::from_json("{ \"max_prealloc\": \"lots\" }") {
        Err(Error::Config(msg)) => assert!(!msg.is_empty()),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_global_config_is_stable() {
    let a = SeqConfig::global() as *const SeqConfig;
    let b = SeqConfig::global() as *const SeqConfig;
    assert_eq!(a, b);
}

#[test]
fn test_exact_len_from_iterators() {
    assert_eq!(exact_len(vec![1, 2, 3].iter().size_hint()), Some(3));
    assert_eq!(exact_len((0..10).filter(|x| x % 2 == 0).size_hint()), None);
}
