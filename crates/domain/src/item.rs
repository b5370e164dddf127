//! The item record and its identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::price::Price;

/// Identifier of an [`Item`].
///
/// `0` marks a record that has not been persisted yet; any other value is
/// assigned by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Identifier of an unsaved item.
    pub const NEW: Self = Self(0);

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns true for the unsaved marker.
    #[must_use]
    pub const fn is_new(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// A single item record as exchanged with the backend.
///
/// Timestamps are kept as the strings the server sent. A missing
/// timestamp deserializes to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier, or [`ItemId::NEW`].
    #[serde(default)]
    pub id: ItemId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: Price,
    /// Creation timestamp, set once by the server.
    #[serde(default)]
    pub created_at: String,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: String,
}

impl Item {
    /// Creates the blank record staged when the user asks for a new item.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: ItemId::NEW,
            name: String::new(),
            description: Some(String::new()),
            price: Price::ZERO,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Returns true if the item has not been persisted yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_new()
    }

    /// Returns true if the server supplied a creation timestamp.
    #[must_use]
    pub fn has_created_at(&self) -> bool {
        !self.created_at.is_empty()
    }
}
