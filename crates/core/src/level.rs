// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity level attached to every interval.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a known [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized interval level {0:?}")]
pub struct ParseLevelError(pub String);

/// Ordered severity of an interval: `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 3] = [Level::Info, Level::Warning, Level::Error];

    /// The canonical string form, as written to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
        }
    }

    /// Parse the canonical string form. Matching is case-sensitive.
    pub fn parse(s: &str) -> Result<Self, ParseLevelError> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
