//! Saving and reloading interval files.

use crate::prelude::*;
use ivl_core::Level;
use ivl_serialization::{encode_all, load, save, save_filtered};

#[test]
fn saved_file_reloads_field_for_field() {
    let work = Workdir::new();
    let (a, b) = scenario();
    let open = open_interval(7, "pod/z", "running");
    let detailed = detailed_interval(Level::Warning, 2, 9);

    let path = work.path("e2e-events.json");
    save(&path, &[a.clone(), b.clone(), open.clone(), detailed.clone()]).unwrap();

    // canonical order: b (0..0), a (0..5), detailed (2..9), open (7..unset)
    assert_eq!(load(&path).unwrap(), vec![b, a, detailed, open]);
}

#[test]
fn save_then_load_then_save_is_byte_identical() {
    let work = Workdir::new();
    let intervals = vec![
        detailed_interval(Level::Info, 4, 8),
        open_interval(1, "pod/a", "pending"),
        point_interval(2, "pod/b", "ready"),
    ];

    save(&work.path("first.json"), &intervals).unwrap();
    let reloaded = load(&work.path("first.json")).unwrap();
    save(&work.path("second.json"), &reloaded).unwrap();

    assert_text_eq(&work.read("second.json"), &work.read("first.json"));
    assert_text_eq(&work.read("first.json"), &text(encode_all(&intervals).unwrap()));
}

#[test]
fn filtered_file_omits_point_events() {
    let work = Workdir::new();
    let (a, b) = scenario();
    let path = work.path("e2e-intervals.json");

    save_filtered(&path, &[a.clone(), b]).unwrap();
    assert_eq!(load(&path).unwrap(), vec![a]);
}

#[test]
fn hand_written_file_with_offsets_and_missing_fields_loads() {
    let work = Workdir::new();
    let path = work.write(
        "legacy.json",
        r#"{"items": [{"level": "Error", "locator": "node/w1", "from": "2026-01-01T01:00:00+01:00"}]}"#,
    );

    let intervals = load(&path).unwrap();
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].level, Level::Error);
    assert_eq!(intervals[0].locator, "node/w1");
    assert_eq!(intervals[0].message, "");
    assert_eq!(intervals[0].from, at(0));
    assert!(intervals[0].is_open());
}
