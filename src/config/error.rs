use std::path::PathBuf;
use thiserror::Error;

use crate::config::parser::ParseError;
use crate::keybindings::ValidationError;
use crate::settings::SettingError;

/// Errors that can occur while reading or writing config files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config path exists but is not a directory.
    #[error("Config path is not a directory: {0}")]
    NotADirectory(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// File content is not valid INI syntax.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    /// A settings entry was rejected by its setting.
    #[error("{} line {line}: {source}", path.display())]
    Setting {
        path: PathBuf,
        line: usize,
        #[source]
        source: SettingError,
    },
    /// A keys section does not name a mode.
    #[error("{} line {line}: unknown mode section [{name}]", path.display())]
    UnknownMode {
        path: PathBuf,
        line: usize,
        name: String,
    },
    /// A keys entry has a malformed key sequence.
    #[error("{} line {line}: {source}", path.display())]
    InvalidKeys {
        path: PathBuf,
        line: usize,
        #[source]
        source: ValidationError,
    },
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
