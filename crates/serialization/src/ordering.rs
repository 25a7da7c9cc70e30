// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical ordering applied to records before a collection is written.
//!
//! Keys, in order: `from`, `to`, `message`, `locator`, all ascending. An
//! unset `to` sorts before any set `to` sharing the same `from`. Records
//! equal on every key keep their input order.

use crate::wire::WireInterval;
use std::cmp::Ordering;

/// Total order over wire records by `(from, to, message, locator)`.
pub fn canonical_cmp(a: &WireInterval, b: &WireInterval) -> Ordering {
    a.from
        .cmp(&b.from)
        .then_with(|| a.to.cmp(&b.to))
        .then_with(|| a.message.cmp(&b.message))
        .then_with(|| a.locator.cmp(&b.locator))
}

/// Stable sort by [`canonical_cmp`].
pub fn sort_canonical(records: &mut [WireInterval]) {
    records.sort_by(canonical_cmp);
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
