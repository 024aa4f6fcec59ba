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

//! src/keybindings/table.rs
//!
//! Mode-scoped keybinding resolver
//!
//! Holds one `Bindings` table per `Mode`. Lookups in `Image`, `Thumbnail`
//! and `Library` fall back to the `Global` table when the mode's own
//! table has no entry; own entries always take precedence.
//!
//! # Performance
//! - Bind, unbind, lookup: O(log n) in the size of the touched tables
//! - Partial match: O(n) in the size of the mode's own table
//! - Effective table of a fallback mode: O(n + m), built on demand

use std::borrow::Cow;

use crate::core::Mode;
use crate::keybindings::bindings::Bindings;
use crate::keybindings::error::BindingError;

/// Keybinding tables for every mode.
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    /// Indexed by `Mode as usize`; every mode always has a table.
    tables: [Bindings; Mode::ALL.len()],
}

impl BindingTable {
    /// Creates a table with every mode empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode's own table, without any fallback.
    pub fn own(&self, mode: Mode) -> &Bindings {
        &self.tables[mode as usize]
    }

    fn own_mut(&mut self, mode: Mode) -> &mut Bindings {
        &mut self.tables[mode as usize]
    }

    /// Binds `keys` to `command` in the mode's own table.
    ///
    /// Overwrites an existing binding of the same sequence in that mode.
    pub fn bind(&mut self, keys: &str, command: &str, mode: Mode) {
        self.own_mut(mode).insert(keys, command);
    }

    /// Removes a binding, following lookup precedence.
    ///
    /// For fallback modes the mode's own entry is removed first. If the
    /// sequence is only reachable through `Global`, the `Global` entry is
    /// removed, which unbinds it for every mode sharing that fallback.
    ///
    /// # Errors
    ///
    /// Returns `BindingError::NotFound` when no applicable table holds
    /// the sequence.
    pub fn unbind(&mut self, keys: &str, mode: Mode) -> Result<(), BindingError> {
        if self.own_mut(mode).remove(keys).is_some() {
            return Ok(());
        }

        if mode.has_global_fallback() && self.own_mut(Mode::Global).remove(keys).is_some() {
            return Ok(());
        }

        Err(BindingError::NotFound {
            keys: keys.to_string(),
            mode,
        })
    }

    /// Resolves `keys` to a command in `mode`, consulting the fallback.
    pub fn lookup(&self, mode: Mode, keys: &str) -> Option<&str> {
        self.own(mode).get(keys).or_else(|| {
            if mode.has_global_fallback() {
                self.own(Mode::Global).get(keys)
            } else {
                None
            }
        })
    }

    /// Effective bindings of `mode`.
    ///
    /// Flat modes borrow their own table. Fallback modes get an owned
    /// union of `Global` and their own table, own entries winning.
    pub fn get(&self, mode: Mode) -> Cow<'_, Bindings> {
        if mode.has_global_fallback() {
            Cow::Owned(self.own(mode).merged_over(self.own(Mode::Global)))
        } else {
            Cow::Borrowed(self.own(mode))
        }
    }

    /// Checks whether `keys` starts some sequence in the mode's own table.
    ///
    /// The `Global` fallback is not consulted, so a multi-key global
    /// sequence cannot be started from a fallback mode unless that
    /// mode's own table covers the prefix.
    pub fn partial_match(&self, mode: Mode, keys: &str) -> bool {
        self.own(mode).partial_match(keys)
    }

    /// Iterates over every mode and its own table.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &Bindings)> {
        Mode::ALL.into_iter().map(move |mode| (mode, self.own(mode)))
    }

    /// Total number of bindings across all own tables.
    pub fn total_bindings(&self) -> usize {
        self.tables.iter().map(Bindings::len).sum()
    }

    /// Empties every mode's table.
    pub fn clear(&mut self) {
        self.tables.iter_mut().for_each(Bindings::clear);
    }
}
