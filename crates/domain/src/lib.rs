//! Itemdesk Domain - Core business types
//!
//! This crate defines the domain model for the Itemdesk client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod item;
pub mod price;
pub mod timestamp;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId};
pub use price::Price;
pub use timestamp::{display_timestamp, to_iso_string};
