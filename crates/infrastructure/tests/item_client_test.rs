//! Integration tests for the reqwest item client and the store running
//! against an in-process HTTP backend.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::sync::Arc;

use common::{Backend, SharedBackend, closed_port, failing_router, item_router, spawn};
use itemdesk_application::store::FETCH_ITEMS_ERROR;
use itemdesk_application::{ItemResource, ItemStore, RequestErrorKind};
use itemdesk_domain::{Item, ItemId, Price};
use itemdesk_infrastructure::{ClientConfig, ReqwestItemClient, SystemClock};
use pretty_assertions::assert_eq;
use tokio::sync::RwLock;

fn draft(name: &str, price: f64) -> Item {
    Item {
        name: name.to_string(),
        description: Some(format!("{name} for testing")),
        price: Price::new(price).unwrap(),
        ..Item::blank()
    }
}

fn client_for(base_url: &str) -> ReqwestItemClient {
    ReqwestItemClient::new(ClientConfig::new(base_url).unwrap()).unwrap()
}

async fn start_backend(backend: Backend) -> (SharedBackend, ReqwestItemClient) {
    let shared = Arc::new(RwLock::new(backend));
    let url = spawn(item_router(Arc::clone(&shared))).await;
    (shared, client_for(&url))
}

#[tokio::test]
async fn test_list_on_empty_backend() {
    let (_backend, client) = start_backend(Backend::default()).await;
    let store = ItemStore::new(Arc::new(client), SystemClock::new());

    let items = store.fetch_items().await.unwrap();

    let state = store.snapshot();
    assert!(items.is_empty());
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_create_then_list_contains_created_item_once() {
    let (_backend, client) = start_backend(Backend::default()).await;

    let created = client.create(&draft("Stapler", 7.5)).await.unwrap();
    assert_eq!(created.id, ItemId::new(1));
    assert!(created.has_created_at());

    let listed = client.list().await.unwrap();
    assert_eq!(listed.iter().filter(|i| i.id == created.id).count(), 1);
}

#[tokio::test]
async fn test_create_ignores_input_id() {
    let (_backend, client) = start_backend(Backend::default()).await;
    let mut item = draft("Ruler", 1.0);
    item.id = ItemId::new(77);

    let created = client.create(&item).await.unwrap();

    assert_eq!(created.id, ItemId::new(1));
}

#[tokio::test]
async fn test_get_by_id_round_trip_and_not_found() {
    let (_backend, client) = start_backend(Backend::default()).await;
    let created = client.create(&draft("Tape", 2.0)).await.unwrap();

    let fetched = client.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let error = client.get_by_id(ItemId::new(404)).await.unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.message(), "Item not found");
}

#[tokio::test]
async fn test_update_through_store_keeps_created_at() {
    let (_backend, client) = start_backend(Backend::default()).await;
    let created = client.create(&draft("Chair", 40.0)).await.unwrap();

    let store = ItemStore::new(Arc::new(client), SystemClock::new());
    store.fetch_items().await.unwrap();
    store.fetch_item_by_id(created.id).await.unwrap();
    store.edit_selected(|item| item.price = Price::new(35.0).unwrap());

    let saved = store.save_selected().await.unwrap().unwrap();

    let state = store.snapshot();
    let stored = state.find(created.id).unwrap();
    assert_eq!(saved.price, Price::new(35.0).unwrap());
    assert_eq!(stored.price, Price::new(35.0).unwrap());
    assert_eq!(stored.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_unknown_id_fails() {
    let (_backend, client) = start_backend(Backend::default()).await;

    let error = client
        .update(ItemId::new(9), &draft("Ghost", 1.0))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), RequestErrorKind::Server { status: 404 });
}

#[tokio::test]
async fn test_delete_removes_item_from_backend_and_state() {
    let (backend, client) = start_backend(Backend::default()).await;
    let keep = client.create(&draft("Keep", 1.0)).await.unwrap();
    let doomed = client.create(&draft("Drop", 1.0)).await.unwrap();

    let store = ItemStore::new(Arc::new(client), SystemClock::new());
    store.fetch_items().await.unwrap();
    store.fetch_item_by_id(doomed.id).await.unwrap();

    let deleted = store.delete_selected().await.unwrap();

    assert_eq!(deleted, Some(doomed.id));
    assert!(!store.snapshot().contains(doomed.id));
    assert!(store.snapshot().contains(keep.id));
    assert_eq!(backend.read().await.items.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_fails_without_mutation() {
    let (_backend, client) = start_backend(Backend::default()).await;
    client.create(&draft("Only", 1.0)).await.unwrap();

    let store = ItemStore::new(Arc::new(client), SystemClock::new());
    store.fetch_items().await.unwrap();

    let error = store.delete_item(ItemId::new(50)).await.unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(store.snapshot().items.len(), 1);
}

#[tokio::test]
async fn test_rejected_create_surfaces_server_message() {
    let (_backend, client) = start_backend(Backend::default()).await;
    let store = ItemStore::new(Arc::new(client), SystemClock::new());
    let mut notifications = store.notifications();

    store.new_item();
    let error = store.save_selected().await.unwrap_err();

    assert_eq!(error.kind(), RequestErrorKind::Server { status: 400 });
    assert_eq!(error.message(), "Name is required");
    assert!(store.snapshot().items.is_empty());
    assert_eq!(
        notifications.recv().await.unwrap().message,
        "Error: Name is required"
    );
}

#[tokio::test]
async fn test_create_without_created_at_is_stamped_locally() {
    let (_backend, client) = start_backend(Backend {
        omit_created_at: true,
        ..Backend::default()
    })
    .await;
    let store = ItemStore::new(Arc::new(client), SystemClock::new());

    let created = store.save_new_item(draft("Lamp", 12.0)).await.unwrap();
    assert!(!created.has_created_at());

    let state = store.snapshot();
    let stored = state.find(created.id).unwrap();
    assert!(stored.has_created_at());
    assert!(chrono::DateTime::parse_from_rfc3339(&stored.created_at).is_ok());
}

#[tokio::test]
async fn test_server_error_without_message_uses_status_line() {
    let url = spawn(failing_router()).await;
    let store = ItemStore::new(Arc::new(client_for(&url)), SystemClock::new());

    let error = store.fetch_items().await.unwrap_err();

    assert_eq!(error.kind(), RequestErrorKind::Server { status: 500 });
    assert_eq!(error.message(), "Request failed with status code 500");

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_ITEMS_ERROR));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let url = closed_port().await;
    let client = client_for(&url);

    let error = client.list().await.unwrap_err();

    assert_eq!(error.kind(), RequestErrorKind::Transport);
    assert!(!error.message().is_empty());
}
