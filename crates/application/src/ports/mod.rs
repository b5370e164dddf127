//! Port definitions (interfaces)
//!
//! Ports are the boundaries between the store and the outside world.
//! Adapters in the infrastructure layer implement them.

mod clock;
mod item_resource;

pub use clock::Clock;
pub use item_resource::{ItemResource, ResourceOperation};
