// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping between [`Interval`] and [`WireInterval`].
//!
//! Lossless in both directions except for the level, which is rendered to
//! its string form on the way out and parsed back on the way in.

use crate::wire::{WireInterval, WireTime};
use ivl_core::{Interval, IntervalSource, Level, ParseLevelError};

/// Render an interval in its on-disk shape. Never fails.
pub fn to_wire(interval: &Interval) -> WireInterval {
    WireInterval {
        level: interval.level.to_string(),
        locator: interval.locator.clone(),
        message: interval.message.clone(),
        source: interval.source.as_str().to_string(),
        sub_source: String::new(),
        structured_locator: interval.structured_locator.clone(),
        structured_message: interval.structured_message.clone(),
        from: WireTime(interval.from),
        to: interval.to.map(WireTime),
    }
}

/// Rebuild an interval from its on-disk shape.
///
/// Fails only when the level string is not a known [`Level`].
/// `tempSubSource` has no counterpart on the model and is dropped.
pub fn from_wire(wire: WireInterval) -> Result<Interval, ParseLevelError> {
    let level = Level::parse(&wire.level)?;
    Ok(Interval {
        source: IntervalSource::new(wire.source),
        level,
        locator: wire.locator,
        structured_locator: wire.structured_locator,
        message: wire.message,
        structured_message: wire.structured_message,
        from: wire.from.into_inner(),
        to: wire.to.map(WireTime::into_inner),
    })
}

impl From<&Interval> for WireInterval {
    fn from(interval: &Interval) -> Self {
        to_wire(interval)
    }
}

impl TryFrom<WireInterval> for Interval {
    type Error = ParseLevelError;

    fn try_from(wire: WireInterval) -> Result<Self, Self::Error> {
        from_wire(wire)
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
