// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Interval, Level};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

// ── Time helpers ────────────────────────────────────────────────────────────

/// Fixed reference instant all factories are relative to.
pub fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_767_225_600, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// `base_time() + secs`
pub fn at(secs: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(secs)
}

// ── Interval factory functions ──────────────────────────────────────────────

/// Closed interval from `from` to `to` seconds after the base time.
pub fn closed_interval(from: i64, to: i64, locator: &str, message: &str) -> Interval {
    Interval::new(Level::Info, at(from))
        .with_locator(locator)
        .with_message(message)
        .with_to(at(to))
}

/// Interval whose end equals its start.
pub fn point_interval(at_secs: i64, locator: &str, message: &str) -> Interval {
    closed_interval(at_secs, at_secs, locator, message)
}

/// Interval with no recorded end.
pub fn open_interval(from: i64, locator: &str, message: &str) -> Interval {
    Interval::new(Level::Info, at(from))
        .with_locator(locator)
        .with_message(message)
}

/// Fully populated interval, including source and structured payloads.
pub fn detailed_interval(level: Level, from: i64, to: i64) -> Interval {
    Interval::new(level, at(from))
        .with_source("KubeEvent")
        .with_locator("ns/e2e pod/web-0 node/worker-1")
        .with_message("reason/Scheduled successfully assigned pod")
        .with_structured_locator(json!({
            "type": "Pod",
            "keys": {"namespace": "e2e", "pod": "web-0", "node": "worker-1"}
        }))
        .with_structured_message(json!({
            "reason": "Scheduled",
            "humanMessage": "successfully assigned pod",
            "annotations": {"count": "1"}
        }))
        .with_to(at(to))
}
