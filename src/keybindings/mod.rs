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

//! src/keybindings/mod.rs
//!
//! Mode-scoped keybinding resolver
//!
//! This module contains:
//! - `Bindings`: the key sequence to command map of one mode
//! - `BindingTable`: one `Bindings` per mode, with `Global` fallback for
//!   the browsing modes
//! - `KeyBuffer`: the keystroke buffering state machine built on
//!   `BindingTable::lookup` and `BindingTable::partial_match`
//! - `validator`: key sequence syntax checks used by the config loader
//! - `defaults::register_all`: the factory keybindings
//!
//! Like the settings registry, nothing here logs or touches the UI.

pub mod bindings;
pub mod buffer;
pub mod defaults;
pub mod error;
pub mod table;
pub mod validator;

pub use bindings::Bindings;
pub use buffer::{KeyBuffer, KeyOutcome};
pub use error::BindingError;
pub use table::BindingTable;
pub use validator::{split_keys, validate_key_sequence, ValidationError};

#[cfg(test)]
mod tests;
