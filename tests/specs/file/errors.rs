//! Failure modes of save and load.

use crate::prelude::*;
use ivl_serialization::{load, save, ErrorKind};

#[test]
fn unknown_level_fails_the_whole_load() {
    let work = Workdir::new();
    let path = work.write(
        "events.json",
        r#"{"items":[
            {"level":"Info","locator":"pod/ok","from":"2026-01-01T00:00:00Z","to":null},
            {"level":"bogus","locator":"pod/x","from":"2026-01-01T00:00:00Z","to":null}
        ]}"#,
    );

    let err = load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    assert_text_eq(
        &err.to_string(),
        r#"invalid level: unrecognized interval level "bogus""#,
    );
}

#[test]
fn truncated_file_is_malformed() {
    let work = Workdir::new();
    let path = work.write("events.json", r#"{"items":[{"level":"Info""#);
    assert_eq!(load(&path).unwrap_err().kind(), ErrorKind::MalformedJson);
}

#[test]
fn missing_file_is_an_io_error() {
    let work = Workdir::new();
    assert_eq!(
        load(&work.path("absent.json")).unwrap_err().kind(),
        ErrorKind::Io
    );
}

#[test]
fn save_under_a_regular_file_is_an_io_error() {
    let work = Workdir::new();
    let blocker = work.write("blocker", "not a directory");
    let (a, b) = scenario();

    let err = save(&blocker.join("events.json"), &[a, b]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
