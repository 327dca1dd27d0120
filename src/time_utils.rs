// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDateTime};

/// Wire format of `startedAt` as produced by the backend.
const STARTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a backend timestamp.
///
/// Accepts the backend's offset-less local form (`2024-11-24T00:00:00`,
/// optional fractional seconds) and RFC 3339 with an offset, in which case
/// the wall-clock time at that offset is kept.
pub fn parse_started_at(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Format a timestamp for display as `YYYY.MM.DD`.
pub fn format_display_date(date: &NaiveDateTime) -> String {
    date.format("%Y.%m.%d").to_string()
}

/// Serde adapter for `startedAt` fields.
pub mod started_at {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(super::STARTED_AT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_started_at(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid startedAt timestamp: {raw}")))
    }
}
