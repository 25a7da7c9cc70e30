// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Deterministic JSON persistence for monitor intervals

mod codec;
mod convert;
mod error;
mod file;
mod ordering;
mod wire;

pub use codec::{
    decode_all, decode_one, encode_all, encode_all_filtered, encode_all_with, encode_one,
    EncodePolicy,
};
pub use convert::{from_wire, to_wire};
pub use error::{ErrorKind, SerializationError};
pub use file::{load, save, save_filtered, save_with};
pub use ordering::{canonical_cmp, sort_canonical};
pub use wire::{WireInterval, WireIntervalList, WireTime};
