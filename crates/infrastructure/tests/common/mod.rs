//! In-process backend used by the integration tests.
#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use itemdesk_domain::{Item, ItemId, to_iso_string};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

type ApiError = (StatusCode, Json<Value>);

/// Backend state shared by the handlers.
#[derive(Debug, Default)]
pub struct Backend {
    pub items: Vec<Item>,
    pub next_id: i64,
    /// Drop `createdAt` from create responses.
    pub omit_created_at: bool,
}

pub type SharedBackend = Arc<RwLock<Backend>>;

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

fn now() -> String {
    to_iso_string(chrono::Utc::now())
}

async fn list_items(State(backend): State<SharedBackend>) -> Json<Vec<Item>> {
    Json(backend.read().await.items.clone())
}

async fn get_item(
    State(backend): State<SharedBackend>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    backend
        .read()
        .await
        .items
        .iter()
        .find(|i| i.id == ItemId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Item not found"))
}

async fn create_item(
    State(backend): State<SharedBackend>,
    Json(item): Json<Item>,
) -> Result<Json<Value>, ApiError> {
    if item.name.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Name is required"));
    }

    let mut backend = backend.write().await;
    backend.next_id += 1;
    let stamp = now();
    let created = Item {
        id: ItemId::new(backend.next_id),
        created_at: stamp.clone(),
        updated_at: stamp,
        ..item
    };
    backend.items.push(created.clone());

    let mut body = serde_json::to_value(&created).unwrap();
    if backend.omit_created_at
        && let Some(fields) = body.as_object_mut()
    {
        fields.remove("createdAt");
    }
    Ok(Json(body))
}

async fn update_item(
    State(backend): State<SharedBackend>,
    Path(id): Path<i64>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, ApiError> {
    let mut backend = backend.write().await;
    let stored = backend
        .items
        .iter_mut()
        .find(|i| i.id == ItemId::new(id))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Item not found"))?;

    *stored = Item {
        id: stored.id,
        created_at: stored.created_at.clone(),
        updated_at: now(),
        ..item
    };
    Ok(Json(stored.clone()))
}

async fn delete_item(
    State(backend): State<SharedBackend>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let mut backend = backend.write().await;
    let before = backend.items.len();
    backend.items.retain(|i| i.id != ItemId::new(id));
    if backend.items.len() == before {
        return Err(api_error(StatusCode::NOT_FOUND, "Item not found"));
    }
    Ok(Json(json!({ "message": "Item deleted" })))
}

/// Router implementing the item REST contract.
pub fn item_router(backend: SharedBackend) -> Router {
    Router::new()
        .route("/api/item", get(list_items))
        .route("/api/item/", post(create_item))
        .route(
            "/api/item/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(backend)
}

/// Router that answers every request with a plain-text 500.
pub fn failing_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") })
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Returns a base URL nothing is listening on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
