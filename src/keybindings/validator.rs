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

//! Key sequence syntax
//!
//! A key sequence is a run of keys. Each key is either a single printable
//! character (`g`, `G`, `+`) or a named key in angle brackets
//! (`<escape>`, `<colon>`, `<page-down>`), optionally preceded by
//! modifiers (`<ctrl>f`, `<ctrl><shift>p`).
//!
//! The resolver accepts any text as a sequence. Validation is applied
//! where sequences enter from outside, i.e. when `keys.conf` is loaded.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest accepted sequence, in keys
pub const MAX_SEQUENCE_KEYS: usize = 32;

const MODIFIERS: &[&str] = &["<ctrl>", "<alt>", "<shift>", "<super>"];

/// One key: any modifiers followed by a named key or a single character
const KEY_PATTERN: &str = r"(?:<(?:ctrl|alt|shift|super)>)*(?:<[A-Za-z0-9_+-]+>|[^<>\s])";

static KEY: LazyLock<Regex> = LazyLock::new(|| build_regex(KEY_PATTERN));

/// A complete sequence of one or more keys
static SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| build_regex(&format!("^(?:{KEY_PATTERN})+$")));

#[allow(clippy::expect_used)]
fn build_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("key sequence pattern should be valid regex")
}

/// Key sequence validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Key sequence is empty")]
    Empty,

    /// Whitespace, stray angle brackets or an unterminated key name
    #[error("Invalid key sequence '{0}'")]
    InvalidSyntax(String),

    /// A modifier with no key after it, e.g. `g<ctrl>`
    #[error("Modifier without a key in '{0}'")]
    DanglingModifier(String),

    #[error("Key sequence too long: {0} keys (max 32)")]
    TooLong(usize),
}

/// Validates the syntax of a key sequence.
pub fn validate_key_sequence(keys: &str) -> Result<(), ValidationError> {
    if keys.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !SEQUENCE.is_match(keys) {
        return Err(ValidationError::InvalidSyntax(keys.to_string()));
    }

    let split = split_keys(keys);

    // `<ctrl>` on its own lexes as a named key; it is only valid as a prefix
    if split.iter().any(|key| MODIFIERS.contains(key)) {
        return Err(ValidationError::DanglingModifier(keys.to_string()));
    }

    if split.len() > MAX_SEQUENCE_KEYS {
        return Err(ValidationError::TooLong(split.len()));
    }

    Ok(())
}

/// Splits a sequence into single keys.
///
/// `"g<ctrl>f<escape>"` becomes `["g", "<ctrl>f", "<escape>"]`. Text the
/// grammar does not cover is skipped, so validate first when the input is
/// untrusted.
pub fn split_keys(keys: &str) -> Vec<&str> {
    KEY.find_iter(keys).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters() {
        assert!(validate_key_sequence("j").is_ok());
        assert!(validate_key_sequence("G").is_ok());
        assert!(validate_key_sequence("+").is_ok());
        assert!(validate_key_sequence("gg").is_ok());
    }

    #[test]
    fn test_modifier_prefix_binds_to_next_key() {
        assert_eq!(split_keys("<ctrl>f"), vec!["<ctrl>f"]);
        assert_eq!(split_keys("<ctrl><shift>p"), vec!["<ctrl><shift>p"]);
    }
}
