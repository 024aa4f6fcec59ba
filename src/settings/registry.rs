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

//! Name-indexed store of all settings
//!
//! The registry is populated once at startup and then queried by name.
//! Names are kept in a BTreeMap so enumeration is sorted, which groups
//! dotted names (`library.width`, `library.show_hidden`) together when
//! the registry is written back to disk.

use std::collections::BTreeMap;

use crate::core::RawValue;
use crate::settings::error::SettingError;
use crate::settings::setting::{Setting, Value};

/// Owns every registered setting.
#[derive(Clone, Debug, Default)]
pub struct SettingsRegistry {
    /// Maps setting name to the setting itself.
    settings: BTreeMap<String, Setting>,
}

impl SettingsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            settings: BTreeMap::new(),
        }
    }

    /// Adds a setting.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::DuplicateRegistration` if the name is taken.
    /// The existing setting is kept.
    pub fn register(&mut self, setting: Setting) -> Result<(), SettingError> {
        if self.settings.contains_key(setting.name()) {
            return Err(SettingError::DuplicateRegistration(
                setting.name().to_string(),
            ));
        }

        self.settings.insert(setting.name().to_string(), setting);
        Ok(())
    }

    /// Returns the current value of a setting.
    pub fn get(&self, name: &str) -> Result<&Value, SettingError> {
        self.get_setting(name).map(Setting::value)
    }

    pub fn get_setting(&self, name: &str) -> Result<&Setting, SettingError> {
        self.settings
            .get(name)
            .ok_or_else(|| SettingError::NotFound(name.to_string()))
    }

    pub fn get_setting_mut(&mut self, name: &str) -> Result<&mut Setting, SettingError> {
        self.settings
            .get_mut(name)
            .ok_or_else(|| SettingError::NotFound(name.to_string()))
    }

    /// Overrides a setting by name with the default converter.
    pub fn override_value(
        &mut self,
        name: &str,
        raw: impl Into<RawValue>,
    ) -> Result<(), SettingError> {
        self.get_setting_mut(name)?.override_value(raw)
    }

    /// Resets one setting to its default.
    pub fn reset(&mut self, name: &str) -> Result<(), SettingError> {
        self.get_setting_mut(name)?.reset();
        Ok(())
    }

    /// Resets every setting to its default.
    pub fn reset_all(&mut self) {
        self.settings.values_mut().for_each(Setting::reset);
    }

    /// Iterates over all settings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    /// Iterates over settings whose value differs from the default.
    pub fn changed(&self) -> impl Iterator<Item = &Setting> {
        self.iter().filter(|setting| !setting.is_default())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Removes every setting.
    pub fn clear(&mut self) {
        self.settings.clear();
    }
}
