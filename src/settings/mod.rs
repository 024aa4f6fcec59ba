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

//! src/settings/mod.rs
//!
//! Typed settings registry
//!
//! This module provides:
//! - `Setting`: a named cell holding a default and a current `Value`
//! - `SettingsRegistry`: the name-indexed store consulted by commands
//! - `defaults::register_all`: the factory configuration
//!
//! Mutation goes through named operations (`override_value`, `toggle`,
//! `add`, `multiply`, `increase`, `decrease`, `reset`). Each one either
//! succeeds or returns a `SettingError` with the value left unchanged.
//! Nothing in this module logs or prints.
//!
//! # Example
//!
//! ```
//! use image_viewer_config::settings::{defaults, SettingsRegistry, Value};
//!
//! let mut registry = SettingsRegistry::new();
//! defaults::register_all(&mut registry)?;
//!
//! registry.override_value("library.width", "0.4")?;
//! assert_eq!(registry.get("library.width")?, &Value::Float(0.4));
//! assert!(!registry.get_setting("library.width")?.is_default());
//! # Ok::<(), image_viewer_config::settings::SettingError>(())
//! ```

pub mod defaults;
pub mod error;
pub mod registry;
pub mod setting;

pub use error::SettingError;
pub use registry::SettingsRegistry;
pub use setting::{Setting, SettingKind, Value, THUMBNAIL_SIZES};

#[cfg(test)]
mod tests;
