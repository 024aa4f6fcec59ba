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

//! Image Viewer Configuration Core
//!
//! The configuration and keyboard layer of a keyboard-driven image
//! viewer, independent of any UI toolkit.
//!
//! # Features
//!
//! - **Typed Settings:** Bool, int, float, text and thumbnail size cells
//!   with default tracking and validated overrides
//! - **Mode-Scoped Keybindings:** One table per mode, with the browsing
//!   modes falling back to a global table
//! - **Multi-Key Sequences:** Prefix matching and a keystroke buffer for
//!   sequences like `gg`
//! - **Config Files:** INI-style `settings.conf` and `keys.conf` with
//!   backups and atomic writes
//!
//! # Architecture
//!
//! - **`core`:** Shared types (`Mode`, `RawValue`) and value conversion
//! - **`settings`:** Setting cells and the settings registry
//! - **`keybindings`:** Binding tables, key buffering, sequence syntax
//! - **`config`:** Reading and writing the config directory
//!
//! The registry and binding table are plain values. They are built once
//! during startup (`defaults::register_all`), optionally overlaid from
//! disk, and then passed by reference to whatever dispatches commands
//! and key events. Neither holds a lock; callers that share them across
//! threads wrap each in its own `Mutex`.
//!
//! # Examples
//!
//! ## Reading and changing settings
//!
//! ```
//! use image_viewer_config::settings::{defaults, SettingsRegistry, Value};
//!
//! let mut registry = SettingsRegistry::new();
//! defaults::register_all(&mut registry)?;
//!
//! registry.get_setting_mut("thumbnail.size")?.increase()?;
//! assert_eq!(registry.get("thumbnail.size")?, &Value::ThumbnailSize(256));
//! # Ok::<(), image_viewer_config::settings::SettingError>(())
//! ```
//!
//! ## Resolving keys
//!
//! ```
//! use image_viewer_config::{BindingTable, KeyBuffer, KeyOutcome, Mode};
//!
//! let mut table = BindingTable::new();
//! table.bind("q", "quit", Mode::Global);
//! table.bind("gg", "goto 1", Mode::Thumbnail);
//!
//! let mut buffer = KeyBuffer::new();
//! assert_eq!(
//!     buffer.press(&table, Mode::Thumbnail, "g"),
//!     KeyOutcome::Pending("g".to_string())
//! );
//! assert_eq!(
//!     buffer.press(&table, Mode::Thumbnail, "g"),
//!     KeyOutcome::Command("goto 1".to_string())
//! );
//! assert_eq!(table.lookup(Mode::Thumbnail, "q"), Some("quit"));
//! ```

pub mod config;
pub mod core;
pub mod keybindings;
pub mod settings;

// Re-export commonly used types for convenience
pub use core::{Mode, RawValue};
pub use keybindings::{BindingTable, Bindings, KeyBuffer, KeyOutcome};
pub use settings::{Setting, SettingsRegistry, Value};
