//! Pure reducer folding actions into [`ItemsState`].

use chrono::{DateTime, Utc};
use itemdesk_domain::{Item, to_iso_string};

use super::action::{AsyncPhase, ItemsAction};
use super::state::{FETCH_ITEMS_ERROR, ItemsState};
use crate::error::RequestError;

/// One-shot message for the presentation layer.
///
/// Emitted when a create or update is rejected; never stored in state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text to show the user.
    pub message: String,
}

impl Notification {
    fn from_error(error: &RequestError) -> Self {
        Self {
            message: format!("Error: {}", error.message()),
        }
    }
}

/// Applies `action` to `state`.
///
/// `now` stamps items the server returned without a creation time.
/// Returns a notification when the action is a rejected create or update.
pub fn reduce(
    state: &mut ItemsState,
    action: ItemsAction,
    now: DateTime<Utc>,
) -> Option<Notification> {
    match action {
        ItemsAction::SelectItem(item) => {
            state.selected = item;
            None
        }

        ItemsAction::FetchItems(phase) => {
            match phase {
                AsyncPhase::Pending => state.loading = true,
                AsyncPhase::Fulfilled(items) => {
                    state.items = items;
                    state.loading = false;
                }
                AsyncPhase::Rejected(_) => {
                    state.loading = false;
                    state.error = Some(FETCH_ITEMS_ERROR.to_string());
                }
            }
            None
        }

        ItemsAction::FetchItemById(phase) => {
            if let AsyncPhase::Fulfilled(item) = phase {
                state.selected = Some(item);
            }
            None
        }

        ItemsAction::SaveNewItem(phase) => match phase {
            AsyncPhase::Pending => None,
            AsyncPhase::Fulfilled(mut item) => {
                if !item.has_created_at() {
                    item.created_at = to_iso_string(now);
                }
                insert_unique(&mut state.items, item);
                None
            }
            AsyncPhase::Rejected(error) => Some(Notification::from_error(&error)),
        },

        ItemsAction::UpdateItem(phase) => match phase {
            AsyncPhase::Pending => None,
            AsyncPhase::Fulfilled(updated) => {
                if let Some(existing) = state.items.iter_mut().find(|i| i.id == updated.id) {
                    let created_at = std::mem::take(&mut existing.created_at);
                    *existing = Item {
                        created_at,
                        ..updated
                    };
                }
                None
            }
            AsyncPhase::Rejected(error) => Some(Notification::from_error(&error)),
        },

        ItemsAction::DeleteItem(phase) => {
            if let AsyncPhase::Fulfilled(id) = phase {
                state.items.retain(|item| item.id != id);
            }
            None
        }
    }
}

// Keeps the collection unique by id if the server hands back an id we
// already hold.
fn insert_unique(items: &mut Vec<Item>, item: Item) {
    match items.iter_mut().find(|i| i.id == item.id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}
