//! Store actions.

use itemdesk_domain::{Item, ItemId};

use crate::error::RequestError;

/// Phase of an asynchronous action.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<T> {
    /// The request has been sent.
    Pending,
    /// The request succeeded with this payload.
    Fulfilled(T),
    /// The request failed.
    Rejected(RequestError),
}

impl<T> AsyncPhase<T> {
    /// Returns a short label for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled(_) => "fulfilled",
            Self::Rejected(_) => "rejected",
        }
    }
}

impl<T> From<Result<T, RequestError>> for AsyncPhase<T> {
    fn from(result: Result<T, RequestError>) -> Self {
        match result {
            Ok(value) => Self::Fulfilled(value),
            Err(error) => Self::Rejected(error),
        }
    }
}

/// Everything that can change [`ItemsState`](super::ItemsState).
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsAction {
    /// Replace the selection. Synchronous.
    SelectItem(Option<Item>),
    /// Fetch the whole collection.
    FetchItems(AsyncPhase<Vec<Item>>),
    /// Fetch one item into the selection.
    FetchItemById(AsyncPhase<Item>),
    /// Create a new item.
    SaveNewItem(AsyncPhase<Item>),
    /// Replace an existing item.
    UpdateItem(AsyncPhase<Item>),
    /// Delete the item with this id.
    DeleteItem(AsyncPhase<ItemId>),
}

impl ItemsAction {
    /// Returns the action type in `name/phase` form.
    #[must_use]
    pub fn describe(&self) -> String {
        let (name, phase) = match self {
            Self::SelectItem(_) => return "items/selectItem".to_string(),
            Self::FetchItems(p) => ("fetchItems", p.label()),
            Self::FetchItemById(p) => ("fetchItemById", p.label()),
            Self::SaveNewItem(p) => ("saveNewItem", p.label()),
            Self::UpdateItem(p) => ("updateItem", p.label()),
            Self::DeleteItem(p) => ("deleteItem", p.label()),
        };
        format!("items/{name}/{phase}")
    }
}
