#![allow(clippy::unwrap_used)]

use adhan_bot::directory::Location;
use adhan_bot::store::LocationStore;

fn location(city: &str, country: &str) -> Location {
    Location {
        display_city: city.to_string(),
        display_country: country.to_string(),
        api_city: city.to_string(),
        api_country: country.to_string(),
    }
}

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let store = LocationStore::new();
    let tripoli = location("Tripoli", "Lebanon");

    store.set(100, tripoli.clone()).await;

    assert_eq!(store.get(100).await, Some(tripoli));
}

#[tokio::test]
async fn test_get_unknown_chat_is_empty() {
    let store = LocationStore::new();
    assert_eq!(store.get(42).await, None);
}

#[tokio::test]
async fn test_set_overwrites_previous_location() {
    let store = LocationStore::new();

    store.set(100, location("Tripoli", "Lebanon")).await;
    store.set(100, location("Doha", "Qatar")).await;

    let saved = store.get(100).await.unwrap();
    assert_eq!(saved.api_city, "Doha");
    assert_eq!(saved.api_country, "Qatar");
}

#[tokio::test]
async fn test_set_resets_alerts_flag() {
    let store = LocationStore::new();

    store.set(100, location("Tripoli", "Lebanon")).await;
    assert!(store.set_alerts(100, true).await);
    assert!(store.alerts_enabled(100).await);

    // A new location starts un-alerted again.
    store.set(100, location("Doha", "Qatar")).await;
    assert!(!store.alerts_enabled(100).await);
}

#[tokio::test]
async fn test_alerts_require_a_saved_location() {
    let store = LocationStore::new();

    assert!(!store.set_alerts(100, true).await);
    assert!(!store.alerts_enabled(100).await);
}

#[tokio::test]
async fn test_clear_removes_the_record() {
    let store = LocationStore::new();

    store.set(100, location("Tripoli", "Lebanon")).await;
    let cleared = store.clear(100).await.unwrap();
    assert_eq!(cleared.location.api_city, "Tripoli");

    assert_eq!(store.get(100).await, None);
    assert!(store.clear(100).await.is_none());
}

#[tokio::test]
async fn test_chats_are_isolated() {
    let store = LocationStore::new();

    store.set(1, location("Tripoli", "Lebanon")).await;
    store.set(2, location("Doha", "Qatar")).await;
    store.set_alerts(1, true).await;

    assert_eq!(store.get(1).await.unwrap().api_city, "Tripoli");
    assert_eq!(store.get(2).await.unwrap().api_city, "Doha");
    assert!(store.alerts_enabled(1).await);
    assert!(!store.alerts_enabled(2).await);

    assert!(store.clear(1).await.is_some());
    assert_eq!(store.get(1).await, None);
    assert_eq!(store.get(2).await.unwrap().api_city, "Doha");
}
