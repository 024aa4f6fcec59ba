// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Config file write transaction with automatic backups
//!
//! Every write of `settings.conf` or `keys.conf` goes through a
//! transaction: the existing file is backed up when the transaction
//! begins, and the new content replaces it atomically on commit.

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::config::{ConfigError, ConfigManager};

/// Atomic write of one config file with a rollback point.
///
/// # Lifecycle
///
/// 1. `begin()` - Backs up the current file, if there is one
/// 2. `commit()` - Writes the new content atomically, or
/// 3. `rollback()` - Restores the backup
///
/// # Example
///
/// ```no_run
/// use image_viewer_config::config::{ConfigManager, ConfigTransaction};
/// use std::path::PathBuf;
///
/// let manager = ConfigManager::new(PathBuf::from("/home/user/.config/imageviewer"))?;
/// let tx = ConfigTransaction::begin(&manager, manager.settings_path())?;
///
/// tx.commit("[GENERAL]\nshuffle = true\n")?;
/// # Ok::<(), image_viewer_config::config::ConfigError>(())
/// ```
pub struct ConfigTransaction<'a> {
    manager: &'a ConfigManager,
    target: PathBuf,
    backup_path: Option<PathBuf>,
}

impl<'a> ConfigTransaction<'a> {
    /// Begins a transaction on `target`.
    ///
    /// If `target` exists a timestamped backup is written immediately.
    /// A file that does not exist yet has no backup.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or the backup
    /// cannot be written. Nothing has been modified in that case.
    pub fn begin(manager: &'a ConfigManager, target: PathBuf) -> Result<Self, ConfigError> {
        let backup_path = if target.exists() {
            Some(manager.create_timestamped_backup(&target)?)
        } else {
            None
        };

        Ok(Self {
            manager,
            target,
            backup_path,
        })
    }

    /// Path of the backup taken by `begin()`, if any.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Atomically replaces the target file with `new_content`.
    ///
    /// Consumes the transaction. On error the original file is untouched
    /// and the backup is still in the manager's backup directory.
    pub fn commit(self, new_content: &str) -> Result<Option<PathBuf>, ConfigError> {
        write_atomic(&self.target, new_content)?;

        debug!(
            path = %self.target.display(),
            config_dir = %self.manager.config_dir().display(),
            bytes = new_content.len(),
            "committed config file"
        );

        Ok(self.backup_path)
    }

    /// Restores the file to its state when the transaction began.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BackupFailed` if the file did not exist at
    /// `begin()`, so there is nothing to restore.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let Some(backup_path) = &self.backup_path else {
            return Err(ConfigError::BackupFailed(
                "No backup available for rollback".to_string(),
            ));
        };

        let backup_content = fs::read_to_string(backup_path)?;
        write_atomic(&self.target, &backup_content)?;

        debug!(
            path = %self.target.display(),
            backup = %backup_path.display(),
            "rolled back config file"
        );

        Ok(())
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    // Open file for atomic writing
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    // Commit atomically
    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}
