//! Store state.

use itemdesk_domain::{Item, ItemId};

/// Error stored when the item list cannot be fetched.
pub const FETCH_ITEMS_ERROR: &str = "Failed to fetch items.";

/// Everything the presentation layer renders from.
///
/// Only the reducer mutates this state; consumers read snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsState {
    /// Items in insertion order, unique by id.
    pub items: Vec<Item>,
    /// True while the item list is being fetched.
    pub loading: bool,
    /// Persistent error shown instead of the list.
    pub error: Option<String>,
    /// Item staged for creation or editing.
    pub selected: Option<Item>,
}

impl ItemsState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds an item by id.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if an item with this id is in the collection.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Returns true if the selection is an unsaved item.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.selected.as_ref().is_some_and(Item::is_new)
    }
}
