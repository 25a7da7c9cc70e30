// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ivl-core: interval model shared by the monitor and its serializers

pub mod interval;
pub mod level;
pub mod structured;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use interval::{Interval, IntervalSource};
pub use level::{Level, ParseLevelError};
pub use structured::{StructuredLocator, StructuredMessage};
