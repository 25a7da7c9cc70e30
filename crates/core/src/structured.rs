// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque structured payloads carried alongside the flat locator and message.
//!
//! Their shape belongs to whoever produced the interval. This crate only
//! copies them through, so they are held as raw JSON values. Object key order
//! is preserved, which keeps re-serialized output byte-comparable.

use serde_json::Value;

/// Define a transparent newtype around an opaque JSON payload.
///
/// Generates `new()`, `as_value()`, `into_value()`, `is_null()` and
/// `From<Value>`. The default value is JSON `null`.
macro_rules! define_payload {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            pub fn new(value: impl Into<Value>) -> Self {
                Self(value.into())
            }

            pub fn as_value(&self) -> &Value {
                &self.0
            }

            pub fn into_value(self) -> Value {
                self.0
            }

            pub fn is_null(&self) -> bool {
                self.0.is_null()
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }
    };
}

define_payload! {
    /// Machine-readable description of what an interval is about.
    pub struct StructuredLocator;
}

define_payload! {
    /// Machine-readable form of an interval's message.
    pub struct StructuredMessage;
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod tests;
