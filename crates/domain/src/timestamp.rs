//! Timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a point in time the way the backend and the store expect:
/// RFC 3339 in UTC with millisecond precision and a `Z` suffix.
#[must_use]
pub fn to_iso_string(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a stored timestamp for display as `dd/mm/yyyy hh.mm am`.
///
/// The time is shown in UTC. Empty or unparseable input yields an
/// empty string.
#[must_use]
pub fn display_timestamp(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .format("%d/%m/%Y %I.%M %P")
                .to_string()
        })
        .unwrap_or_default()
}
