mod common;

use common::{bus, server_error, Call, ScriptedApi};
use std::sync::Arc;
use std::time::Duration;
use ticketdesk::registry::BusRegistry;

#[tokio::test]
async fn refresh_replaces_collection() {
    let api = Arc::new(ScriptedApi::with_buses(vec![bus(1, "Express"), bus(2, "Night")]));
    let registry = BusRegistry::new(api.clone());

    registry.refresh().await;

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.buses.len(), 2);
    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn failure_clears_buses_and_sets_error() {
    let api = Arc::new(ScriptedApi::with_buses(vec![bus(1, "Express")]));
    let registry = BusRegistry::new(api.clone());
    registry.refresh().await;

    api.push_list(Duration::ZERO, Err(server_error(503, "Service down")));
    registry.refresh().await;

    let snapshot = registry.snapshot();
    assert!(snapshot.buses.is_empty());
    assert_eq!(snapshot.error.as_deref(), Some("Service down"));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn success_clears_previous_error() {
    let api = Arc::new(ScriptedApi::with_buses(vec![bus(1, "Express")]));
    api.push_list(Duration::ZERO, Err(server_error(500, "boom")));
    let registry = BusRegistry::new(api.clone());

    registry.refresh().await;
    assert!(registry.snapshot().error.is_some());

    registry.refresh().await;
    let snapshot = registry.snapshot();
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.buses, vec![bus(1, "Express")]);
}

#[tokio::test]
async fn repeated_refresh_is_idempotent() {
    let api = Arc::new(ScriptedApi::with_buses(vec![bus(1, "Express")]));
    let registry = BusRegistry::new(api.clone());

    registry.refresh().await;
    let first = registry.snapshot();
    registry.refresh().await;
    assert_eq!(registry.snapshot(), first);
    assert_eq!(api.count(|c| *c == Call::ListBuses), 2);
}

#[tokio::test]
async fn loading_is_visible_while_fetching() {
    let api = Arc::new(ScriptedApi::default());
    api.push_list(Duration::from_millis(100), Ok(vec![bus(1, "Express")]));
    let registry = BusRegistry::new(api.clone());

    let task = tokio::spawn({
        let registry = registry.clone();
        async move { registry.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(registry.snapshot().loading);

    task.await.unwrap();
    assert!(!registry.snapshot().loading);
}

#[tokio::test]
async fn dropped_refresh_clears_loading() {
    let api = Arc::new(ScriptedApi::default());
    api.push_list(Duration::from_millis(500), Ok(vec![bus(1, "Express")]));
    let registry = BusRegistry::new(api.clone());

    let result = tokio::time::timeout(Duration::from_millis(20), registry.refresh()).await;
    assert!(result.is_err());

    let snapshot = registry.snapshot();
    assert!(!snapshot.loading);
    assert!(snapshot.buses.is_empty());
}

#[tokio::test]
async fn stale_response_never_overwrites_newer_one() {
    let api = Arc::new(ScriptedApi::default());
    // First request is slow and carries old data.
    api.push_list(Duration::from_millis(150), Ok(vec![bus(1, "Old")]));
    api.push_list(Duration::ZERO, Ok(vec![bus(2, "New")]));
    let registry = BusRegistry::new(api.clone());

    tokio::join!(registry.refresh(), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        registry.refresh().await;
        // Newer result is visible while the older fetch is still running.
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.buses, vec![bus(2, "New")]);
        assert!(snapshot.loading);
    });

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.buses, vec![bus(2, "New")]);
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn subscribers_see_changes() {
    let api = Arc::new(ScriptedApi::with_buses(vec![bus(4, "Coastal")]));
    let registry = BusRegistry::new(api.clone());
    let mut rx = registry.subscribe();

    registry.refresh().await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().buses, vec![bus(4, "Coastal")]);
}
