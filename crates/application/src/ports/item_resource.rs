//! Item resource port
//!
//! Defines the five CRUD operations the store needs from the backend.

use async_trait::async_trait;
use itemdesk_domain::{Item, ItemId};

use crate::error::RequestResult;

/// Identifies a resource operation, mainly for logging and fallback
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceOperation {
    /// Fetch every item.
    List,
    /// Fetch one item by id.
    GetById,
    /// Create a new item.
    Create,
    /// Replace an existing item.
    Update,
    /// Delete an item.
    Remove,
}

impl ResourceOperation {
    /// Returns a short name for log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::GetById => "get_by_id",
            Self::Create => "create",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }

    /// Returns the message used when nothing better is available.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::List | Self::GetById => "Could not fetch items from the API",
            Self::Create => "Failed to insert item",
            Self::Update => "Failed to update item",
            Self::Remove => "Could not delete item from the API",
        }
    }
}

/// Port for item CRUD against the backend.
///
/// Implementations never retry and never partially apply a failed
/// operation; every failure is reported as a single
/// [`RequestError`](crate::RequestError).
#[async_trait]
pub trait ItemResource: Send + Sync {
    /// Fetches all items.
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload cannot be decoded.
    async fn list(&self) -> RequestResult<Vec<Item>>;

    /// Fetches a single item.
    ///
    /// # Errors
    /// Returns a not-found server error if no record matches.
    async fn get_by_id(&self, id: ItemId) -> RequestResult<Item>;

    /// Creates an item. The server assigns the id and timestamps; the id of
    /// `item` is ignored.
    ///
    /// # Errors
    /// Returns an error if the server rejects the item.
    async fn create(&self, item: &Item) -> RequestResult<Item>;

    /// Replaces the item stored under `id`.
    ///
    /// # Errors
    /// Returns an error if the id does not exist or the server rejects the item.
    async fn update(&self, id: ItemId, item: &Item) -> RequestResult<Item>;

    /// Deletes the item stored under `id` and returns the server's
    /// confirmation payload.
    ///
    /// # Errors
    /// Returns an error if the id does not exist.
    async fn remove(&self, id: ItemId) -> RequestResult<serde_json::Value>;
}
