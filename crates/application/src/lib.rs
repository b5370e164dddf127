//! Itemdesk Application - Ports and the state store
//!
//! This crate defines the application layer with:
//! - Port traits (the item resource and the clock)
//! - The state store: state, actions, reducer and container
//! - The request error shared by every resource operation

pub mod error;
pub mod ports;
pub mod store;

pub use error::{RequestError, RequestErrorKind, RequestResult, best_effort_message};
pub use ports::{Clock, ItemResource, ResourceOperation};
pub use store::{AsyncPhase, ItemStore, ItemsAction, ItemsState, Notification};
