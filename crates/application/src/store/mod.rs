//! Client-side state store.
//!
//! Actions are plain values, the reducer is a pure function, and
//! [`ItemStore`] wires both to an [`ItemResource`](crate::ports::ItemResource).

mod action;
mod item_store;
mod reducer;
mod state;

pub use action::{AsyncPhase, ItemsAction};
pub use item_store::ItemStore;
pub use reducer::{Notification, reduce};
pub use state::{FETCH_ITEMS_ERROR, ItemsState};
