// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interval model: one observed event span from a monitored run.
//!
//! An interval always has a start. Its end is either a real instant or unset,
//! and the two are kept apart: `to: None` means no end was recorded, while
//! `to: Some(from)` is a closed interval collapsed to a single point.

use crate::level::Level;
use crate::structured::{StructuredLocator, StructuredMessage};
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Short category tag naming the component that observed an interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntervalSource(String);

impl IntervalSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IntervalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IntervalSource {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IntervalSource {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for IntervalSource {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IntervalSource {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A timestamped event span.
///
/// Intervals are built by the monitoring side and treated as read-only
/// afterwards; serialization only reads and re-represents them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub source: IntervalSource,
    pub level: Level,
    /// Free-form subject of the event, e.g. `ns/e2e pod/web-0`
    pub locator: String,
    pub structured_locator: StructuredLocator,
    /// Human-readable description
    pub message: String,
    pub structured_message: StructuredMessage,
    pub from: DateTime<Utc>,
    /// End of the span; `None` when no end was recorded
    pub to: Option<DateTime<Utc>>,
}

impl Interval {
    /// Create an open interval starting at `from` with empty text fields.
    pub fn new(level: Level, from: DateTime<Utc>) -> Self {
        Self {
            source: IntervalSource::default(),
            level,
            locator: String::new(),
            structured_locator: StructuredLocator::default(),
            message: String::new(),
            structured_message: StructuredMessage::default(),
            from,
            to: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<IntervalSource>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = locator.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_structured_locator(mut self, locator: impl Into<StructuredLocator>) -> Self {
        self.structured_locator = locator.into();
        self
    }

    pub fn with_structured_message(mut self, message: impl Into<StructuredMessage>) -> Self {
        self.structured_message = message.into();
        self
    }

    /// Close the interval at `to`.
    pub fn with_to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Close the interval at its own start, making it a point event.
    pub fn point(self) -> Self {
        let from = self.from;
        self.with_to(from)
    }

    /// True when no end instant was recorded.
    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// True when the end is set and equal to the start.
    ///
    /// An open interval is never zero-duration, whatever its start.
    pub fn is_zero_duration(&self) -> bool {
        self.to == Some(self.from)
    }

    /// Length of the span, or `None` while open.
    pub fn duration(&self) -> Option<Duration> {
        self.to.map(|to| to - self.from)
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
