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

//! Config file persistence for settings and keybindings.
//!
//! The config directory holds two files:
//!
//! - `settings.conf`: `[GENERAL]` entries map to bare setting names,
//!   `[LIBRARY] width = 0.4` maps to `library.width`
//! - `keys.conf`: one section per mode, `gg : goto 1`
//!
//! Loading feeds each entry through the regular `override_value` and
//! `bind` operations, so a file can never bypass validation. A missing
//! file leaves the defaults in place. Writing is transactional: the old
//! file is backed up, then replaced atomically.
//!
//! # Example
//!
//! ```no_run
//! use image_viewer_config::config::ConfigManager;
//! use image_viewer_config::settings::{defaults, SettingsRegistry};
//!
//! let manager = ConfigManager::new("/home/user/.config/imageviewer".into())?;
//!
//! let mut registry = SettingsRegistry::new();
//! defaults::register_all(&mut registry)?;
//! let report = manager.load_settings(&mut registry)?;
//! println!("{} settings applied", report.applied);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod parser;
pub mod transaction;

pub use error::ConfigError;
pub use transaction::ConfigTransaction;

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::Mode;
use crate::keybindings::{validate_key_sequence, BindingTable};
use crate::settings::{SettingError, SettingsRegistry};
use parser::{parse_document, quote_value, Section};

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.conf";
/// File name of the keybindings file inside the config directory
pub const KEYS_FILE: &str = "keys.conf";

/// Section holding settings without a dotted prefix
pub const GENERAL_SECTION: &str = "GENERAL";

/// Characters that cannot appear literally as keys in `keys.conf`
///
/// `:` splits an entry, `#` and `;` start comments, `[` starts a section
/// header. `]` is escaped alongside `[` to keep the file readable.
const KEY_ESCAPES: &[(&str, &str)] = &[
    (":", "<colon>"),
    ("#", "<numbersign>"),
    (";", "<semicolon>"),
    ("[", "<bracketleft>"),
    ("]", "<bracketright>"),
];

/// Outcome of loading one config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Entries applied to the registry or table
    pub applied: usize,
    /// Setting names present in the file but not registered
    pub skipped: Vec<String>,
}

/// Manages the config directory with safe atomic writes.
#[derive(Debug)]
pub struct ConfigManager {
    config_dir: PathBuf,
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `config_dir`.
    ///
    /// The directory and its `backups/` subdirectory are created if they
    /// do not exist. A symlinked directory is allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotADirectory` if `config_dir` is a file.
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(config_dir: PathBuf) -> Result<Self, ConfigError> {
        if config_dir.exists() && !config_dir.is_dir() {
            return Err(ConfigError::NotADirectory(config_dir));
        }

        if config_dir.read_link().is_ok() {
            warn!(path = %config_dir.display(), "config directory is a symlink");
        }

        fs::create_dir_all(&config_dir)?;

        let backup_dir = config_dir.join("backups");
        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            config_dir,
            backup_dir,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn keys_path(&self) -> PathBuf {
        self.config_dir.join(KEYS_FILE)
    }

    /// Applies `settings.conf` to `registry`.
    ///
    /// Returns an empty report when the file does not exist.
    pub fn load_settings(&self, registry: &mut SettingsRegistry) -> Result<LoadReport, ConfigError> {
        let path = self.settings_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(LoadReport::default());
        };

        apply_settings(&content, &path, registry)
    }

    /// Applies `keys.conf` to `table`, on top of its current bindings.
    ///
    /// Returns an empty report when the file does not exist.
    pub fn load_keybindings(&self, table: &mut BindingTable) -> Result<LoadReport, ConfigError> {
        let path = self.keys_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(LoadReport::default());
        };

        apply_keybindings(&content, &path, table)
    }

    /// Writes every setting to `settings.conf`.
    ///
    /// Returns the path of the backup of the previous file, if one existed.
    pub fn save_settings(&self, registry: &SettingsRegistry) -> Result<Option<PathBuf>, ConfigError> {
        ConfigTransaction::begin(self, self.settings_path())?.commit(&render_settings(registry))
    }

    /// Writes every mode's own bindings to `keys.conf`.
    pub fn save_keybindings(&self, table: &BindingTable) -> Result<Option<PathBuf>, ConfigError> {
        ConfigTransaction::begin(self, self.keys_path())?.commit(&render_keybindings(table))
    }

    /// Copies `path` into the backup directory as `<name>.<YYYY-MM-DD_HHMMSS>`.
    pub(crate) fn create_timestamped_backup(&self, path: &Path) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(path)?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConfigError::BackupFailed(format!("Invalid file name: {}", path.display()))
            })?;

        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        fs::write(&backup_path, &content)
            .map_err(|e| ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e)))?;

        info!(backup = %backup_path.display(), "created config backup");
        Ok(backup_path)
    }

    /// Lists backup files, oldest first.
    ///
    /// Timestamps sort lexically, so sorting by file name orders each
    /// config file's backups chronologically.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut backups = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect::<Vec<_>>();

        backups.sort();
        Ok(backups)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file missing, keeping defaults");
        return Ok(None);
    }

    debug!(path = %path.display(), "reading config file");
    Ok(Some(fs::read_to_string(path)?))
}

fn parse(content: &str, path: &Path, delimiter: char) -> Result<Vec<Section>, ConfigError> {
    parse_document(content, delimiter).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Maps a section and key to a setting name.
///
/// `GENERAL` keys are used as-is; other sections prefix the lowercased
/// section name.
pub fn setting_name(section: &str, key: &str) -> String {
    if section.eq_ignore_ascii_case(GENERAL_SECTION) {
        key.to_string()
    } else {
        format!("{}.{}", section.to_lowercase(), key)
    }
}

/// Applies settings file content to `registry`.
///
/// Unknown names are skipped and reported. Any other rejected entry
/// aborts loading; entries before it stay applied.
pub fn apply_settings(
    content: &str,
    path: &Path,
    registry: &mut SettingsRegistry,
) -> Result<LoadReport, ConfigError> {
    let mut report = LoadReport::default();

    for section in parse(content, path, '=')? {
        for entry in section.entries {
            let name = setting_name(&section.name, &entry.key);

            match registry.override_value(&name, entry.value.as_str()) {
                Ok(()) => {
                    debug!(setting = %name, value = %entry.value, "applied setting");
                    report.applied += 1;
                }
                Err(SettingError::NotFound(_)) => {
                    warn!(setting = %name, line = entry.line, "unknown setting skipped");
                    report.skipped.push(name);
                }
                Err(source) => {
                    return Err(ConfigError::Setting {
                        path: path.to_path_buf(),
                        line: entry.line,
                        source,
                    });
                }
            }
        }
    }

    Ok(report)
}

/// Applies keys file content to `table`.
pub fn apply_keybindings(
    content: &str,
    path: &Path,
    table: &mut BindingTable,
) -> Result<LoadReport, ConfigError> {
    let mut report = LoadReport::default();

    for section in parse(content, path, ':')? {
        let mode: Mode = section.name.parse().map_err(|_| ConfigError::UnknownMode {
            path: path.to_path_buf(),
            line: section.line,
            name: section.name.clone(),
        })?;

        for entry in section.entries {
            validate_key_sequence(&entry.key).map_err(|source| ConfigError::InvalidKeys {
                path: path.to_path_buf(),
                line: entry.line,
                source,
            })?;

            let keys = unescape_keys(&entry.key);
            debug!(%mode, keys = %keys, command = %entry.value, "applied keybinding");
            table.bind(&keys, &entry.value, mode);
            report.applied += 1;
        }
    }

    Ok(report)
}

/// Renders every setting as `settings.conf` content.
///
/// `[GENERAL]` comes first, the remaining sections follow sorted by name.
pub fn render_settings(registry: &SettingsRegistry) -> String {
    let mut sections: Vec<(String, Vec<String>)> = vec![(GENERAL_SECTION.to_string(), Vec::new())];

    for setting in registry.iter() {
        let (section, key) = match setting.name().split_once('.') {
            Some((prefix, key)) => (prefix.to_uppercase(), key),
            None => (GENERAL_SECTION.to_string(), setting.name()),
        };

        let line = format!("{} = {}", key, quote_value(&setting.value().to_string()));
        match sections.iter_mut().find(|(name, _)| *name == section) {
            Some((_, lines)) => lines.push(line),
            None => sections.push((section, vec![line])),
        }
    }

    let mut out = String::from("# Settings written by ivconf\n");
    for (name, lines) in sections.iter().filter(|(_, lines)| !lines.is_empty()) {
        out.push_str(&format!("\n[{}]\n", name));
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

/// Renders every mode's own bindings as `keys.conf` content.
pub fn render_keybindings(table: &BindingTable) -> String {
    let mut out = String::from("# Keybindings written by ivconf\n");

    for (mode, bindings) in table.iter().filter(|(_, bindings)| !bindings.is_empty()) {
        out.push_str(&format!("\n[{}]\n", mode));
        for (keys, command) in bindings.iter() {
            out.push_str(&format!("{} : {}\n", escape_keys(keys), quote_value(command)));
        }
    }

    out
}

/// Replaces characters the file format reserves with named keys.
///
/// The named forms (`<colon>`, `<bracketleft>`, ...) are aliases of the
/// characters themselves: `unescape_keys` turns a sequence bound as
/// `<colon>` into `:` as well, so both spellings load as the same key.
pub fn escape_keys(keys: &str) -> String {
    KEY_ESCAPES
        .iter()
        .fold(keys.to_string(), |acc, (raw, named)| acc.replace(raw, named))
}

/// Inverse of `escape_keys`, mapping every named alias to its character.
pub fn unescape_keys(keys: &str) -> String {
    KEY_ESCAPES
        .iter()
        .fold(keys.to_string(), |acc, (raw, named)| acc.replace(named, raw))
}

#[cfg(test)]
mod tests;
