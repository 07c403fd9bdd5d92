// Integration tests for the history and analytics stores

use rx_decoder::{AnalyticsStore, HistoryStore};

#[test]
fn test_history_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::at(dir.path().join("history.json"));

    store.record("po bid").unwrap();
    store.record("q4h").unwrap();

    // a second store over the same file sees the same entries
    let reopened = HistoryStore::at(dir.path().join("history.json"));
    let entries = reopened.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].query, "q4h");
    assert_eq!(entries[1].query, "po bid");
    assert!(entries[0].timestamp >= entries[1].timestamp);
}

#[test]
fn test_history_rolls_and_deduplicates() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::at(dir.path().join("history.json"));

    for i in 0..12 {
        store.record(&format!("query-{}", i)).unwrap();
    }
    store.record("query-5").unwrap();

    let entries = store.entries();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].query, "query-5");
    assert_eq!(entries.iter().filter(|e| e.query == "query-5").count(), 1);
}

#[test]
fn test_analytics_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = AnalyticsStore::in_dir(dir.path().to_path_buf());

    store
        .track("po", true, vec!["po".to_string()], vec!["npo".to_string()])
        .unwrap();
    store.track("nope", false, vec![], vec![]).unwrap();

    let reopened = AnalyticsStore::in_dir(dir.path().to_path_buf());
    let stats = reopened.stats();
    assert_eq!(stats.total_searches, 2);
    assert_eq!(stats.successful_searches, 1);
    assert_eq!(stats.unique_queries, 2);
    assert!((stats.success_rate - 50.0).abs() < 1e-4);
}

#[test]
fn test_analytics_popular_counters_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..3 {
        let store = AnalyticsStore::in_dir(dir.path().to_path_buf());
        store.track("po", true, vec![], vec![]).unwrap();
    }

    let store = AnalyticsStore::in_dir(dir.path().to_path_buf());
    let popular = store.popular();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].count, 3);
    assert_eq!(popular[0].success_rate, 1.0);
}

#[test]
fn test_stores_start_empty_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::at(dir.path().join("history.json"));
    let analytics = AnalyticsStore::in_dir(dir.path().to_path_buf());

    assert!(history.entries().is_empty());
    assert_eq!(analytics.stats().total_searches, 0);

    history.record("po").unwrap();
    analytics.track("po", true, vec![], vec![]).unwrap();

    history.clear().unwrap();
    analytics.clear().unwrap();

    assert!(history.entries().is_empty());
    assert!(analytics.events().is_empty());
    assert!(analytics.popular().is_empty());
}
