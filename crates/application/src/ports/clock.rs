//! Clock port

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// The store asks the clock when it has to stamp an item the server
/// returned without a creation time.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
