//! Finds the most recently modified job log in a directory

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::error::{Result, StatusError};

/// A candidate job log, enumerated fresh on every poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub name: String,
    pub modified: DateTime<Utc>,
}

/// Select the newest file in `dir` whose name ends with `extension`.
///
/// Only immediate entries are considered; subdirectories are skipped.
/// Entries are visited in file-name order and a candidate replaces the
/// current best only when its modification time is strictly later, so among
/// equal timestamps the first name in order wins. Every entry name is
/// listed once per call at `info`.
pub fn find_latest_log(dir: &Path, extension: &str) -> Result<LogFile> {
    let read_dir = fs::read_dir(dir).map_err(|source| StatusError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry"),
        }
    }
    entries.sort_by_key(|entry| entry.file_name());

    let names: Vec<String> = entries
        .iter()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    info!(dir = %dir.display(), files = ?names, "Found files in log directory");

    let mut latest: Option<LogFile> = None;

    for (entry, name) in entries.into_iter().zip(names) {
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(file = %name, error = %e, "Cannot stat entry, skipping");
                continue;
            }
        };

        if metadata.is_dir() || !name.ends_with(extension) {
            continue;
        }

        let modified = match metadata.modified() {
            Ok(time) => DateTime::<Utc>::from(time),
            Err(e) => {
                warn!(file = %name, error = %e, "Modification time unavailable, skipping");
                continue;
            }
        };

        let replaces = latest
            .as_ref()
            .is_none_or(|best| modified > best.modified);

        if replaces {
            latest = Some(LogFile {
                path: absolute(&entry.path()),
                name,
                modified,
            });
        }
    }

    latest.ok_or_else(|| StatusError::NoMatchingFile {
        path: dir.to_path_buf(),
        extension: extension.to_string(),
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
