//! Item price.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-negative, finite decimal price.
///
/// Serialized as a plain JSON number. Deserialization rejects negative
/// and non-finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0.0);

    /// Creates a price, validating that it is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFinitePrice`] for NaN or infinity and
    /// [`DomainError::NegativePrice`] for values below zero.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(DomainError::NegativePrice(value));
        }
        Ok(Self(value))
    }

    /// Normalizes free-form user input into a price.
    ///
    /// Every character other than an ASCII digit or `.` is dropped, then the
    /// leading `digits[.digits]` run is read; anything after a second `.` is
    /// ignored. Input with no leading number becomes `0.00`.
    #[must_use]
    pub fn parse_input(input: &str) -> Self {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        leading_number(&cleaned)
            .parse::<f64>()
            .ok()
            .and_then(|v| Self::new(v).ok())
            .unwrap_or(Self::ZERO)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

// Longest prefix of the form `digits[.digits]`.
fn leading_number(cleaned: &str) -> &str {
    let end = cleaned
        .char_indices()
        .scan(false, |seen_dot, (i, c)| {
            if c == '.' {
                if *seen_dot {
                    return None;
                }
                *seen_dot = true;
            }
            Some(i + c.len_utf8())
        })
        .last()
        .unwrap_or(0);
    &cleaned[..end]
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
