//! Client photo storage.
//!
//! Photos are written to `<directory>/<YYYY-MM>/<Name>_<YYYY-MM-DD>_<millis>.jpg` and
//! referenced by the forward-slash path `/<directory>/<YYYY-MM>/<file>`, which is what
//! gets stored in `clients.photo_data`.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Turns a client name into a safe file stem.
///
/// Keeps letters and digits from any script plus `_` and `-`, maps whitespace to `_`
/// and drops everything else. Falls back to `unknown` when nothing is left.
#[must_use]
pub fn safe_file_stem(fullname: &str) -> String {
    let stem: String = fullname
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    if stem.is_empty() {
        "unknown".to_string()
    } else {
        stem
    }
}

/// Path of a new photo relative to the photo directory.
#[must_use]
pub fn photo_relative_path(fullname: &str, now: DateTime<Utc>) -> PathBuf {
    let file_name = format!(
        "{}_{}_{}.jpg",
        safe_file_stem(fullname),
        now.format("%Y-%m-%d"),
        now.timestamp_millis()
    );
    PathBuf::from(now.format("%Y-%m").to_string()).join(file_name)
}

/// The reference stored for a photo file: its path with forward slashes and a leading `/`.
#[must_use]
pub fn photo_reference(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    format!("/{}", normalized.trim_start_matches('/'))
}

/// Writes a client photo under `directory` and returns its reference.
#[instrument(skip(bytes), fields(size = bytes.len()))]
pub async fn save_photo(
    directory: &Path,
    fullname: &str,
    bytes: &[u8],
    now: DateTime<Utc>,
) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::validation("photo is empty"));
    }

    let path = directory.join(photo_relative_path(fullname, now));
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;

    let reference = photo_reference(&path);
    debug!("Stored photo at {}", reference);
    Ok(reference)
}
