//! Collection document layout and policies.

use crate::prelude::*;
use ivl_core::Level;
use ivl_serialization::{encode_all, encode_all_filtered};
use serde_json::json;

#[test]
fn scenario_full_encoding_sorts_point_event_first() {
    let (a, b) = scenario();
    assert_text_eq(
        &text(encode_all(&[a, b]).unwrap()),
        r#"{
    "items": [
        {
            "level": "Info",
            "locator": "pod/y",
            "message": "ready",
            "tempStructuredLocator": null,
            "tempStructuredMessage": null,
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-01T00:00:00Z"
        },
        {
            "level": "Info",
            "locator": "pod/x",
            "message": "started",
            "tempStructuredLocator": null,
            "tempStructuredMessage": null,
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-01T00:00:05Z"
        }
    ]
}"#,
    );
}

#[test]
fn scenario_filtered_encoding_keeps_only_the_span() {
    let (a, b) = scenario();
    assert_text_eq(
        &text(encode_all_filtered(&[a, b]).unwrap()),
        r#"{
    "items": [
        {
            "level": "Info",
            "locator": "pod/x",
            "message": "started",
            "tempStructuredLocator": null,
            "tempStructuredMessage": null,
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-01T00:00:05Z"
        }
    ]
}"#,
    );
}

#[test]
fn open_interval_survives_filtering() {
    let open = open_interval(0, "pod/z", "running");
    let full = text(encode_all(std::slice::from_ref(&open)).unwrap());
    let filtered = text(encode_all_filtered(&[open]).unwrap());
    assert_text_eq(&filtered, &full);
    assert!(full.contains(r#""to": null"#));
}

#[test]
fn structured_payloads_and_source_are_written_verbatim() {
    let interval = ivl_core::Interval::new(Level::Warning, at(0))
        .with_source("Alert")
        .with_locator("alert/Watchdog")
        .with_message("firing")
        .with_structured_locator(json!({"type": "Alert", "keys": {"alert": "Watchdog"}}))
        .with_structured_message(json!({"reason": "Firing"}))
        .with_to(at(60));

    assert_text_eq(
        &text(encode_all(&[interval]).unwrap()),
        r#"{
    "items": [
        {
            "level": "Warning",
            "locator": "alert/Watchdog",
            "message": "firing",
            "tempSource": "Alert",
            "tempStructuredLocator": {
                "type": "Alert",
                "keys": {
                    "alert": "Watchdog"
                }
            },
            "tempStructuredMessage": {
                "reason": "Firing"
            },
            "from": "2026-01-01T00:00:00Z",
            "to": "2026-01-01T00:01:00Z"
        }
    ]
}"#,
    );
}

#[test]
fn output_is_identical_for_any_input_order() {
    let intervals = vec![
        closed_interval(3, 4, "pod/c", "c"),
        open_interval(1, "pod/a", "a"),
        point_interval(1, "pod/b", "b"),
        closed_interval(1, 2, "pod/d", "a"),
    ];
    let mut shuffled = intervals.clone();
    shuffled.rotate_left(2);
    shuffled.swap(0, 3);

    assert_text_eq(
        &text(encode_all(&shuffled).unwrap()),
        &text(encode_all(&intervals).unwrap()),
    );
}
