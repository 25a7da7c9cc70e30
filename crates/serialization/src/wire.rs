// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk JSON shape of intervals.
//!
//! The flat `locator`/`message` fields and their `tempStructured*`
//! counterparts are both written while consumers migrate to the structured
//! form. Readers trust the flat fields and carry the structured ones through.
//!
//! ```text
//! {
//!     "items": [
//!         {
//!             "level": "Info",
//!             "locator": "...",
//!             "message": "...",
//!             "tempSource": "...",
//!             "tempStructuredLocator": {...},
//!             "tempStructuredMessage": {...},
//!             "from": "2026-01-01T00:00:00Z",
//!             "to": null
//!         }
//!     ]
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, ParseError, SecondsFormat, Utc};
use ivl_core::{StructuredLocator, StructuredMessage};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Instant as written to disk: RFC3339 in UTC with a `Z` suffix.
///
/// Fractional seconds are emitted only when non-zero, using 3, 6 or 9 digits,
/// so any instant survives a round trip. Input with another offset is
/// accepted and normalized to UTC. Years outside `0000..=9999` are written
/// with a leading sign (`+10000-01-01T00:00:00Z`) and read back the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireTime(pub DateTime<Utc>);

impl WireTime {
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for WireTime {
    fn from(time: DateTime<Utc>) -> Self {
        Self(time)
    }
}

impl fmt::Display for WireTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for WireTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WireTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_wire_time(&text)
            .map(WireTime)
            .map_err(|e| de::Error::custom(format_args!("invalid timestamp {text:?}: {e}")))
    }
}

/// Layout of a signed extended-year timestamp, minus its `Z` suffix.
const EXTENDED_YEAR_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn parse_wire_time(text: &str) -> Result<DateTime<Utc>, ParseError> {
    let err = match DateTime::parse_from_rfc3339(text) {
        Ok(time) => return Ok(time.with_timezone(&Utc)),
        Err(e) => e,
    };
    // RFC3339 has no room for a year sign; accept the form Display emits
    match text.strip_suffix('Z') {
        Some(naive) if naive.starts_with(|c: char| c == '+' || c == '-') => {
            NaiveDateTime::parse_from_str(naive, EXTENDED_YEAR_FORMAT).map(|time| time.and_utc())
        }
        _ => Err(err),
    }
}

/// One interval as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireInterval {
    /// Rendered [`ivl_core::Level`]
    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub locator: String,
    #[serde(default)]
    pub message: String,

    #[serde(rename = "tempSource", default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// Reserved; never populated by the converter
    #[serde(rename = "tempSubSource", default, skip_serializing_if = "String::is_empty")]
    pub sub_source: String,

    #[serde(rename = "tempStructuredLocator", default)]
    pub structured_locator: StructuredLocator,
    #[serde(rename = "tempStructuredMessage", default)]
    pub structured_message: StructuredMessage,

    pub from: WireTime,
    /// `null` when the interval has no recorded end
    #[serde(default)]
    pub to: Option<WireTime>,
}

/// Top-level document: a list of intervals under `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireIntervalList {
    #[serde(default)]
    pub items: Vec<WireInterval>,
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
