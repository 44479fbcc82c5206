use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Cannot read log directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No '{extension}' log file found in {}", path.display())]
    NoMatchingFile { path: PathBuf, extension: String },

    #[error("Cannot read log file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No backup status marker found in {}", path.display())]
    NoStatusFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, StatusError>;
