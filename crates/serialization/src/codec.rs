// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON encoding and decoding of intervals.
//!
//! Single records are written on one line with no insignificant whitespace.
//! Collections are sorted by [`canonical_cmp`](crate::ordering::canonical_cmp)
//! and pretty-printed with a 4-space indent so that files from different runs
//! diff cleanly.

use crate::convert::{from_wire, to_wire};
use crate::ordering::sort_canonical;
use crate::wire::{WireInterval, WireIntervalList};
use crate::SerializationError;
use ivl_core::Interval;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Which intervals a collection encoding keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodePolicy {
    /// Keep every interval.
    #[default]
    All,
    /// Drop closed intervals whose end equals their start. Intervals with an
    /// unset end are always kept.
    SkipZeroDuration,
}

impl EncodePolicy {
    /// Whether `interval` is written under this policy.
    pub fn keeps(&self, interval: &Interval) -> bool {
        match self {
            EncodePolicy::All => true,
            EncodePolicy::SkipZeroDuration => !interval.is_zero_duration(),
        }
    }
}

/// Encode one interval as a single-line JSON object.
pub fn encode_one(interval: &Interval) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(&to_wire(interval))?)
}

/// Encode every interval as a sorted, indented collection.
pub fn encode_all(intervals: &[Interval]) -> Result<Vec<u8>, SerializationError> {
    encode_all_with(intervals, EncodePolicy::All)
}

/// Like [`encode_all`], but drops zero-duration closed intervals.
pub fn encode_all_filtered(intervals: &[Interval]) -> Result<Vec<u8>, SerializationError> {
    encode_all_with(intervals, EncodePolicy::SkipZeroDuration)
}

/// Encode a collection under an explicit [`EncodePolicy`].
pub fn encode_all_with(
    intervals: &[Interval],
    policy: EncodePolicy,
) -> Result<Vec<u8>, SerializationError> {
    Ok(encode_collection(intervals, policy)?.data)
}

/// Collection bytes plus how many intervals made it in.
pub(crate) struct EncodedCollection {
    pub data: Vec<u8>,
    pub kept: usize,
}

pub(crate) fn encode_collection(
    intervals: &[Interval],
    policy: EncodePolicy,
) -> Result<EncodedCollection, SerializationError> {
    let mut items: Vec<WireInterval> = intervals
        .iter()
        .filter(|interval| policy.keeps(interval))
        .map(to_wire)
        .collect();

    let kept = items.len();
    let dropped = intervals.len() - kept;
    if dropped > 0 {
        debug!(dropped, kept, ?policy, "filtered intervals before encoding");
    }

    sort_canonical(&mut items);
    let data = to_pretty_json(&WireIntervalList { items })?;
    Ok(EncodedCollection { data, kept })
}

/// Decode a single-record document produced by [`encode_one`].
pub fn decode_one(data: &[u8]) -> Result<Interval, SerializationError> {
    let wire: WireInterval = serde_json::from_slice(data)?;
    Ok(from_wire(wire)?)
}

/// Decode a collection document.
///
/// The first unrecognized level aborts the whole decode.
pub fn decode_all(data: &[u8]) -> Result<Vec<Interval>, SerializationError> {
    let list: WireIntervalList = serde_json::from_slice(data)?;
    let intervals = list
        .items
        .into_iter()
        .map(from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(intervals)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
