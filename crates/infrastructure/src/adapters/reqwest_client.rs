//! Item resource implementation using reqwest.
//!
//! This adapter implements the `ItemResource` port over the REST contract
//! of the backend: `GET/POST/PUT/DELETE` on `/api/item` with JSON bodies.

use async_trait::async_trait;
use itemdesk_application::{
    ItemResource, RequestError, RequestResult, ResourceOperation, best_effort_message,
};
use itemdesk_domain::{Item, ItemId};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ClientConfig;

/// Path of the item resource on the backend.
pub const RESOURCE_PATH: &str = "/api/item";

/// Message used when a payload cannot be decoded.
const DECODE_FALLBACK: &str = "An unexpected error occurred";

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    message: Option<String>,
}

/// Resource client for items backed by `reqwest::Client`.
///
/// Requests carry a JSON content type, are never retried and use the
/// transport's default timeouts. Every failure is logged before it is
/// returned.
#[derive(Debug, Clone)]
pub struct ReqwestItemClient {
    client: Client,
    config: ClientConfig,
}

impl ReqwestItemClient {
    /// Creates a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> RequestResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!("itemdesk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| RequestError::unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn collection_url(&self) -> String {
        self.config.endpoint(RESOURCE_PATH)
    }

    // The backend registers creation on the slash-terminated path.
    fn create_url(&self) -> String {
        self.config.endpoint(&format!("{RESOURCE_PATH}/"))
    }

    fn item_url(&self, id: ItemId) -> String {
        self.config.endpoint(&format!("{RESOURCE_PATH}/{id}"))
    }

    /// Sends `request`, decodes the payload and logs any failure.
    async fn send<T: DeserializeOwned>(
        operation: ResourceOperation,
        request: RequestBuilder,
    ) -> RequestResult<T> {
        let result = Self::execute(operation, request).await;
        if let Err(e) = &result {
            error!(
                operation = operation.name(),
                kind = ?e.kind(),
                error = %e,
                "item request failed"
            );
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        operation: ResourceOperation,
        request: RequestBuilder,
    ) -> RequestResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Self::map_error(operation, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(operation, &e))?;

        if !status.is_success() {
            return Err(Self::server_error(operation, status, &body));
        }

        Self::decode(&body)
    }

    /// Maps a reqwest failure to a `RequestError`.
    fn map_error(operation: ResourceOperation, error: &reqwest::Error) -> RequestError {
        let transport_message = error.to_string();
        let message =
            best_effort_message(None, Some(&transport_message), operation.fallback_message());

        if error.is_builder() {
            return RequestError::unknown(message);
        }
        RequestError::transport(message)
    }

    /// Builds the error for a non-2xx response.
    ///
    /// A `message` field in a JSON body takes precedence over the status line.
    fn server_error(operation: ResourceOperation, status: StatusCode, body: &[u8]) -> RequestError {
        let server_message = serde_json::from_slice::<ServerErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        let transport_message = format!("Request failed with status code {}", status.as_u16());

        RequestError::server(
            status.as_u16(),
            best_effort_message(
                server_message.as_deref(),
                Some(&transport_message),
                operation.fallback_message(),
            ),
        )
    }

    /// Decodes a JSON payload. An empty body decodes as `null`.
    fn decode<T: DeserializeOwned>(body: &[u8]) -> RequestResult<T> {
        let decoded = if body.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(body)
        };

        decoded.map_err(|e| {
            debug!(error = %e, "response body did not decode");
            RequestError::unknown(DECODE_FALLBACK)
        })
    }
}

#[async_trait]
impl ItemResource for ReqwestItemClient {
    async fn list(&self) -> RequestResult<Vec<Item>> {
        let request = self.client.get(self.collection_url());
        Self::send(ResourceOperation::List, request).await
    }

    async fn get_by_id(&self, id: ItemId) -> RequestResult<Item> {
        let request = self.client.get(self.item_url(id));
        Self::send(ResourceOperation::GetById, request).await
    }

    async fn create(&self, item: &Item) -> RequestResult<Item> {
        let request = self.client.post(self.create_url()).json(item);
        Self::send(ResourceOperation::Create, request).await
    }

    async fn update(&self, id: ItemId, item: &Item) -> RequestResult<Item> {
        let request = self.client.put(self.item_url(id)).json(item);
        Self::send(ResourceOperation::Update, request).await
    }

    async fn remove(&self, id: ItemId) -> RequestResult<serde_json::Value> {
        let request = self.client.delete(self.item_url(id));
        Self::send(ResourceOperation::Remove, request).await
    }
}
