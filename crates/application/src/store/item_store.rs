//! The store container.

use std::collections::HashMap;
use std::sync::Arc;

use itemdesk_domain::{Item, ItemId};
use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use super::action::{AsyncPhase, ItemsAction};
use super::reducer::{Notification, reduce};
use super::state::ItemsState;
use crate::error::RequestResult;
use crate::ports::{Clock, ItemResource};

const NOTIFICATION_CAPACITY: usize = 16;

/// Holds the authoritative [`ItemsState`] and runs actions against an
/// [`ItemResource`].
///
/// Each network action dispatches `Pending`, awaits the resource, then
/// dispatches `Fulfilled` or `Rejected`. State is only changed by the
/// reducer and the state lock is never held across an `.await`.
///
/// Overlapping requests are not serialized: when two updates for the same
/// id are in flight, whichever response resolves last is what the
/// collection ends up holding. Overlaps are logged.
///
/// # Example
///
/// ```ignore
/// let store = ItemStore::new(Arc::new(ReqwestItemClient::new(config)?), SystemClock::new());
/// store.fetch_items().await?;
/// for item in store.snapshot().items {
///     println!("{} {}", item.id, item.name);
/// }
/// ```
pub struct ItemStore<R, C> {
    resource: Arc<R>,
    clock: C,
    state: watch::Sender<ItemsState>,
    notifications: broadcast::Sender<Notification>,
    in_flight_updates: Mutex<HashMap<ItemId, usize>>,
}

impl<R: ItemResource, C: Clock> ItemStore<R, C> {
    /// Creates a store with empty state.
    pub fn new(resource: Arc<R>, clock: C) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            resource,
            clock,
            state: watch::Sender::new(ItemsState::new()),
            notifications,
            in_flight_updates: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ItemsState {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ItemsState> {
        self.state.subscribe()
    }

    /// Returns a receiver for rejected create/update notifications.
    #[must_use]
    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Runs `action` through the reducer and publishes the result.
    pub fn dispatch(&self, action: ItemsAction) -> Option<Notification> {
        debug!(action = %action.describe(), "dispatch");

        let now = self.clock.now();
        let mut notification = None;
        self.state
            .send_modify(|state| notification = reduce(state, action, now));

        if let Some(note) = &notification
            && self.notifications.send(note.clone()).is_err()
        {
            debug!("notification dropped, no subscribers");
        }
        notification
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selected(&self) -> Option<Item> {
        self.state.borrow().selected.clone()
    }

    /// Replaces the selection.
    pub fn select_item(&self, item: Option<Item>) {
        self.dispatch(ItemsAction::SelectItem(item));
    }

    /// Selects a blank, unsaved item.
    pub fn new_item(&self) {
        self.select_item(Some(Item::blank()));
    }

    /// Stages an edit on the current selection.
    ///
    /// Returns false if nothing is selected.
    pub fn edit_selected(&self, edit: impl FnOnce(&mut Item)) -> bool {
        let Some(mut item) = self.selected() else {
            return false;
        };
        edit(&mut item);
        self.select_item(Some(item));
        true
    }

    /// Fetches the whole collection.
    ///
    /// A failure is also recorded in state as a static error message.
    ///
    /// # Errors
    /// Returns the resource error.
    pub async fn fetch_items(&self) -> RequestResult<Vec<Item>> {
        self.dispatch(ItemsAction::FetchItems(AsyncPhase::Pending));
        let result = self.resource.list().await;
        self.settle(&result, ItemsAction::FetchItems);
        result
    }

    /// Fetches one item into the selection.
    ///
    /// # Errors
    /// Returns the resource error; state is left untouched.
    pub async fn fetch_item_by_id(&self, id: ItemId) -> RequestResult<Item> {
        self.dispatch(ItemsAction::FetchItemById(AsyncPhase::Pending));
        let result = self.resource.get_by_id(id).await;
        self.settle(&result, ItemsAction::FetchItemById);
        result
    }

    /// Creates `item` and appends the server's copy to the collection.
    ///
    /// # Errors
    /// Returns the resource error after emitting a [`Notification`].
    pub async fn save_new_item(&self, item: Item) -> RequestResult<Item> {
        self.dispatch(ItemsAction::SaveNewItem(AsyncPhase::Pending));
        let result = self.resource.create(&item).await;
        self.settle(&result, ItemsAction::SaveNewItem);
        result
    }

    /// Replaces the stored item with the same id.
    ///
    /// The stored `created_at` survives whatever the server echoes back.
    ///
    /// # Errors
    /// Returns the resource error after emitting a [`Notification`].
    pub async fn update_item(&self, item: Item) -> RequestResult<Item> {
        let _in_flight = self.track_update(item.id);
        self.dispatch(ItemsAction::UpdateItem(AsyncPhase::Pending));
        let result = self.resource.update(item.id, &item).await;
        self.settle(&result, ItemsAction::UpdateItem);
        result
    }

    /// Deletes the item with `id` and drops it from the collection.
    ///
    /// # Errors
    /// Returns the resource error; state is left untouched.
    pub async fn delete_item(&self, id: ItemId) -> RequestResult<ItemId> {
        self.dispatch(ItemsAction::DeleteItem(AsyncPhase::Pending));
        let result = self.resource.remove(id).await.map(|confirmation| {
            debug!(item_id = %id, %confirmation, "item deleted");
            id
        });
        self.settle(&result, ItemsAction::DeleteItem);
        result
    }

    /// Saves the selection: creates it when unsaved, updates it otherwise.
    ///
    /// Returns `Ok(None)` if nothing is selected.
    ///
    /// # Errors
    /// Returns the resource error of the create or update.
    pub async fn save_selected(&self) -> RequestResult<Option<Item>> {
        let Some(item) = self.selected() else {
            return Ok(None);
        };

        let saved = if item.is_new() {
            self.save_new_item(item).await?
        } else {
            self.update_item(item).await?
        };
        Ok(Some(saved))
    }

    /// Deletes the selected item.
    ///
    /// Returns `Ok(None)` if nothing is selected or the selection was
    /// never saved.
    ///
    /// # Errors
    /// Returns the resource error of the delete.
    pub async fn delete_selected(&self) -> RequestResult<Option<ItemId>> {
        let Some(item) = self.selected().filter(|item| !item.is_new()) else {
            return Ok(None);
        };
        self.delete_item(item.id).await.map(Some)
    }

    /// Returns how many updates for `id` are currently awaiting a response.
    #[must_use]
    pub fn in_flight_updates(&self, id: ItemId) -> usize {
        self.in_flight_updates.lock().get(&id).copied().unwrap_or(0)
    }

    fn settle<T: Clone>(
        &self,
        result: &RequestResult<T>,
        action: fn(AsyncPhase<T>) -> ItemsAction,
    ) -> Option<Notification> {
        self.dispatch(action(result.clone().into()))
    }

    fn track_update(&self, id: ItemId) -> InFlightUpdate<'_> {
        let mut updates = self.in_flight_updates.lock();
        let count = updates.entry(id).or_insert(0);
        if *count > 0 {
            warn!(
                item_id = %id,
                in_flight = *count,
                "overlapping update dispatched, last response to resolve wins"
            );
        }
        *count += 1;

        InFlightUpdate {
            updates: &self.in_flight_updates,
            id,
        }
    }
}

struct InFlightUpdate<'a> {
    updates: &'a Mutex<HashMap<ItemId, usize>>,
    id: ItemId,
}

impl Drop for InFlightUpdate<'_> {
    fn drop(&mut self) {
        let mut updates = self.updates.lock();
        if let Some(count) = updates.get_mut(&self.id) {
            *count -= 1;
            if *count == 0 {
                updates.remove(&self.id);
            }
        }
    }
}
