// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while encoding, decoding, saving or loading intervals.

use ivl_core::ParseLevelError;
use thiserror::Error;

/// Every error is terminal for the operation that raised it. Decoding never
/// returns a partial result.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    InvalidLevel(#[from] ParseLevelError),
}

/// Coarse classification of a [`SerializationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedJson,
    InvalidLevel,
}

impl SerializationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerializationError::Io(_) => ErrorKind::Io,
            SerializationError::MalformedJson(_) => ErrorKind::MalformedJson,
            SerializationError::InvalidLevel(_) => ErrorKind::InvalidLevel,
        }
    }
}
