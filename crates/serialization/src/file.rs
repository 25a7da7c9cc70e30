// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Saving and loading interval files.
//!
//! Writes go through a sibling `<name>.tmp` file (`events.json` →
//! `events.json.tmp`) that is synced and renamed over the target, so a failed save never leaves a half-written file behind.
//! Callers must not save and load the same path concurrently.

use crate::codec::{decode_all, encode_collection, EncodePolicy};
use crate::SerializationError;
use ivl_core::Interval;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Write every interval to `path`.
pub fn save(path: &Path, intervals: &[Interval]) -> Result<(), SerializationError> {
    save_with(path, intervals, EncodePolicy::All)
}

/// Write `path`, dropping zero-duration closed intervals.
pub fn save_filtered(path: &Path, intervals: &[Interval]) -> Result<(), SerializationError> {
    save_with(path, intervals, EncodePolicy::SkipZeroDuration)
}

/// Write `path` under an explicit [`EncodePolicy`].
pub fn save_with(
    path: &Path,
    intervals: &[Interval],
    policy: EncodePolicy,
) -> Result<(), SerializationError> {
    let encoded = encode_collection(intervals, policy)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = tmp_path(path);
    let written = write_synced(&tmp_path, &encoded.data).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!(
        path = %path.display(),
        count = encoded.kept,
        bytes = encoded.data.len(),
        ?policy,
        "saved intervals",
    );
    Ok(())
}

/// Read and decode every interval in `path`.
pub fn load(path: &Path) -> Result<Vec<Interval>, SerializationError> {
    let data = fs::read(path)?;
    match decode_all(&data) {
        Ok(intervals) => {
            debug!(path = %path.display(), count = intervals.len(), "loaded intervals");
            Ok(intervals)
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to decode interval file");
            Err(e)
        }
    }
}

/// `path` with `.tmp` appended to its full file name.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
