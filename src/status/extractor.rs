//! Derives a backup outcome from the text of a job log

use std::fs;
use std::path::Path;

use super::BackupStatus;
use super::error::{Result, StatusError};

/// The literal substrings that identify a job outcome
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub success: &'a str,
    pub failure: &'a str,
}

/// Scan `content` line by line; the last line carrying a marker decides.
///
/// A line containing both markers counts as a success. Returns `None` when
/// no line matches.
pub fn scan_status(content: &str, markers: Markers<'_>) -> Option<BackupStatus> {
    content.lines().fold(None, |last, line| {
        if line.contains(markers.success) {
            Some(BackupStatus::Succeeded)
        } else if line.contains(markers.failure) {
            Some(BackupStatus::Failed)
        } else {
            last
        }
    })
}

/// Read the whole file as text and scan it. Invalid UTF-8 is replaced, not rejected.
pub fn extract_status(path: &Path, markers: Markers<'_>) -> Result<BackupStatus> {
    let bytes = fs::read(path).map_err(|source| StatusError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    scan_status(&content, markers).ok_or_else(|| StatusError::NoStatusFound {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKERS: Markers<'static> = Markers {
        success: "Backup job succeeded",
        failure: "Backup job failed",
    };

    #[test]
    fn test_success_only() {
        let content = "<log>\n<entry>Backup job succeeded</entry>\n</log>";
        assert_eq!(scan_status(content, MARKERS), Some(BackupStatus::Succeeded));
    }

    #[test]
    fn test_failure_only() {
        let content = "<log>\n<entry>Backup job failed</entry>\n</log>";
        assert_eq!(scan_status(content, MARKERS), Some(BackupStatus::Failed));
    }

    #[test]
    fn test_last_match_wins() {
        let retried = "Backup job failed\nretrying\nBackup job succeeded\n";
        assert_eq!(scan_status(retried, MARKERS), Some(BackupStatus::Succeeded));

        let regressed = "Backup job succeeded\nBackup job failed\ntrailer\n";
        assert_eq!(scan_status(regressed, MARKERS), Some(BackupStatus::Failed));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(scan_status("<log>\nnothing here\n</log>", MARKERS), None);
        assert_eq!(scan_status("", MARKERS), None);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(scan_status("BACKUP JOB SUCCEEDED", MARKERS), None);
    }

    #[test]
    fn test_line_with_both_markers_is_success() {
        let content = "Backup job failed; Backup job succeeded";
        assert_eq!(scan_status(content, MARKERS), Some(BackupStatus::Succeeded));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "header\r\nBackup job failed\r\n";
        assert_eq!(scan_status(content, MARKERS), Some(BackupStatus::Failed));
    }

    #[test]
    fn test_extract_status_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("job.xml");
        fs::write(&path, "<a>Backup job failed</a>\n<b>Backup job succeeded</b>\n").unwrap();

        assert_eq!(extract_status(&path, MARKERS).unwrap(), BackupStatus::Succeeded);
    }

    #[test]
    fn test_extract_status_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("job.xml");
        let mut bytes = vec![0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(b"Backup job failed\n");
        fs::write(&path, bytes).unwrap();

        assert_eq!(extract_status(&path, MARKERS).unwrap(), BackupStatus::Failed);
    }

    #[test]
    fn test_extract_status_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.xml");
        assert!(matches!(
            extract_status(&missing, MARKERS),
            Err(StatusError::FileUnreadable { .. })
        ));

        let empty = temp_dir.path().join("empty.xml");
        fs::write(&empty, "").unwrap();
        assert!(matches!(
            extract_status(&empty, MARKERS),
            Err(StatusError::NoStatusFound { .. })
        ));
    }
}
