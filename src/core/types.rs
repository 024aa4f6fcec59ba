//! src/core/types.rs
//!
//! Core type definitions shared by the settings and keybinding layers
//!
//! This module defines:
//! - `Mode`: The application context that selects the active keybinding table
//! - `RawValue`: Untyped input handed to a setting override
//!
//! Both types implement serialization so the CLI can emit them as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Application mode
///
/// Each mode owns one keybinding table. `Image`, `Thumbnail` and `Library`
/// additionally see the `Global` table as a fallback layer; every other
/// mode is flat.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Mode {
    /// Bindings shared by the browsing modes
    Global,
    /// Single image view
    Image,
    /// Thumbnail grid
    Thumbnail,
    /// File library sidebar
    Library,
    /// Command line
    Command,
    /// Image manipulation panel
    Manipulate,
}

impl Mode {
    /// Every mode, in declaration order
    pub const ALL: [Mode; 6] = [
        Mode::Global,
        Mode::Image,
        Mode::Thumbnail,
        Mode::Library,
        Mode::Command,
        Mode::Manipulate,
    ];

    /// Whether lookups in this mode fall back to the `Global` table.
    pub fn has_global_fallback(self) -> bool {
        matches!(self, Mode::Image | Mode::Thumbnail | Mode::Library)
    }

    /// Upper-case name as used for config file sections.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Global => "GLOBAL",
            Mode::Image => "IMAGE",
            Mode::Thumbnail => "THUMBNAIL",
            Mode::Library => "LIBRARY",
            Mode::Command => "COMMAND",
            Mode::Manipulate => "MANIPULATE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a mode name is not recognised
#[derive(Debug, Error, PartialEq)]
#[error("Unknown mode '{0}'")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

/// Untyped value handed to a setting override
///
/// Config files and the command line always produce `Text`. The typed
/// variants exist for callers that already hold a parsed value (for
/// example a command that passes a count).
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl RawValue {
    /// Human-readable rendering used in conversion error messages
    pub fn describe(&self) -> String {
        match self {
            RawValue::Text(text) => text.clone(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(i) => i.to_string(),
            RawValue::Float(f) => f.to_string(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}
