//! Multi-key sequence buffering
//!
//! The key-event dispatcher feeds single keys into a `KeyBuffer`. While
//! the keys typed so far start some binding, they are held back; once
//! they form a complete sequence the command is emitted. A key that
//! neither completes nor extends a sequence discards the whole buffer.
//!
//! ```text
//! Idle ──k: exact──────────────▶ emit, Idle
//! Idle ──k: prefix─────────────▶ Buffering(k)
//! Idle ──k: no match───────────▶ discard, Idle
//! Buffering(p) ──k: exact──────▶ emit, Idle
//! Buffering(p) ──k: prefix─────▶ Buffering(p + k)
//! Buffering(p) ──k: no match───▶ discard p + k, Idle
//! ```

use crate::core::Mode;
use crate::keybindings::table::BindingTable;

/// Result of feeding one key into the buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyOutcome {
    /// The buffered keys completed a binding.
    Command(String),
    /// The buffered keys start at least one binding; waiting for more.
    Pending(String),
    /// The buffered keys match nothing and were dropped.
    Discarded(String),
}

/// Buffers keystrokes until they resolve to a command.
#[derive(Clone, Debug, Default)]
pub struct KeyBuffer {
    /// Keys typed so far; empty while idle.
    keys: String,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently held back, if any.
    pub fn pending(&self) -> Option<&str> {
        if self.keys.is_empty() {
            None
        } else {
            Some(&self.keys)
        }
    }

    /// Drops any buffered keys.
    pub fn reset(&mut self) {
        self.keys.clear();
    }

    /// Feeds `key` typed in `mode`.
    ///
    /// Exact matches use the effective bindings of the mode. Prefix checks
    /// use the mode's own table only. On a miss the complete buffered
    /// sequence is discarded; the final key is not re-evaluated on its own.
    pub fn press(&mut self, table: &BindingTable, mode: Mode, key: &str) -> KeyOutcome {
        let mut candidate = std::mem::take(&mut self.keys);
        candidate.push_str(key);

        if let Some(command) = table.lookup(mode, &candidate) {
            return KeyOutcome::Command(command.to_string());
        }

        if table.partial_match(mode, &candidate) {
            self.keys.clone_from(&candidate);
            return KeyOutcome::Pending(candidate);
        }

        KeyOutcome::Discarded(candidate)
    }
}
