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

//! src/settings/setting.rs
//!
//! A single typed configuration cell
//!
//! A `Setting` pairs an immutable default with a mutable current value.
//! Both are always the same `Value` variant: constructors pick the
//! variant and every mutation matches on it, so a setting can never
//! change type after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{ConversionError, Convert, RawValue, StrConvert};
use crate::settings::error::SettingError;

/// Allowed thumbnail sizes in pixels, smallest first
pub const THUMBNAIL_SIZES: [u32; 4] = [64, 128, 256, 512];

/// Kind of a setting, one per `Value` variant
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    Bool,
    Int,
    Float,
    Str,
    ThumbnailSize,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Bool => write!(f, "bool"),
            SettingKind::Int => write!(f, "int"),
            SettingKind::Float => write!(f, "float"),
            SettingKind::Str => write!(f, "str"),
            SettingKind::ThumbnailSize => write!(f, "thumbnail size"),
        }
    }
}

/// Stored value of a setting
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    ThumbnailSize(u32),
}

impl Value {
    pub fn kind(&self) -> SettingKind {
        match self {
            Value::Bool(_) => SettingKind::Bool,
            Value::Int(_) => SettingKind::Int,
            Value::Float(_) => SettingKind::Float,
            Value::Str(_) => SettingKind::Str,
            Value::ThumbnailSize(_) => SettingKind::ThumbnailSize,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::ThumbnailSize(size) => write!(f, "{}", size),
        }
    }
}

/// A named, typed configuration value with a fixed default
///
/// # Example
/// ```
/// use image_viewer_config::settings::{Setting, Value};
///
/// let mut size = Setting::thumbnail_size("thumbnail.size", 128)?;
/// size.increase()?;
/// assert_eq!(size.value(), &Value::ThumbnailSize(256));
/// assert!(!size.is_default());
///
/// size.reset();
/// assert!(size.is_default());
/// # Ok::<(), image_viewer_config::settings::SettingError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Setting {
    name: String,
    default: Value,
    value: Value,
}

impl Setting {
    fn with_default(name: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            value: default.clone(),
            default,
        }
    }

    pub fn bool(name: &str, default: bool) -> Self {
        Self::with_default(name, Value::Bool(default))
    }

    pub fn int(name: &str, default: i64) -> Self {
        Self::with_default(name, Value::Int(default))
    }

    pub fn float(name: &str, default: f64) -> Self {
        Self::with_default(name, Value::Float(default))
    }

    pub fn string(name: &str, default: &str) -> Self {
        Self::with_default(name, Value::Str(default.to_string()))
    }

    /// Creates a thumbnail size setting.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::DomainViolation` if `default` is not one of
    /// `THUMBNAIL_SIZES`.
    pub fn thumbnail_size(name: &str, default: u32) -> Result<Self, SettingError> {
        let size = checked_thumbnail_size(name, i64::from(default))?;
        Ok(Self::with_default(name, Value::ThumbnailSize(size)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SettingKind {
        self.default.kind()
    }

    /// Current value
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// True while the current value equals the default.
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    /// Restores the default value.
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Replaces the current value by parsing `raw` with the default converter.
    pub fn override_value(&mut self, raw: impl Into<RawValue>) -> Result<(), SettingError> {
        self.override_with(&raw.into(), &StrConvert)
    }

    /// Replaces the current value by parsing `raw` with `convert`.
    ///
    /// # Errors
    ///
    /// - `SettingError::TypeMismatch` if `convert` rejects the input
    /// - `SettingError::DomainViolation` if a thumbnail size is not allowed
    ///
    /// The current value is unchanged on error.
    pub fn override_with<C>(&mut self, raw: &RawValue, convert: &C) -> Result<(), SettingError>
    where
        C: Convert + ?Sized,
    {
        let name = self.name.as_str();
        let parsed = match self.default {
            Value::Bool(_) => Value::Bool(convert.to_bool(raw).map_err(type_mismatch(name))?),
            Value::Int(_) => Value::Int(convert.to_int(raw).map_err(type_mismatch(name))?),
            Value::Float(_) => Value::Float(convert.to_float(raw).map_err(type_mismatch(name))?),
            Value::Str(_) => Value::Str(convert.to_str(raw).map_err(type_mismatch(name))?),
            Value::ThumbnailSize(_) => {
                let size = convert.to_int(raw).map_err(type_mismatch(name))?;
                Value::ThumbnailSize(checked_thumbnail_size(name, size)?)
            }
        };

        self.value = parsed;
        Ok(())
    }

    /// Inverts a boolean setting.
    pub fn toggle(&mut self) -> Result<(), SettingError> {
        match &mut self.value {
            Value::Bool(b) => {
                *b = !*b;
                Ok(())
            }
            other => Err(unsupported(&self.name, "toggle", other.kind())),
        }
    }

    /// Adds `raw` to a numeric setting using the default converter.
    pub fn add(&mut self, raw: impl Into<RawValue>) -> Result<(), SettingError> {
        self.add_with(&raw.into(), &StrConvert)
    }

    /// Adds `raw` to the current value of an int or float setting.
    ///
    /// The result is not range-checked. Integer arithmetic saturates.
    pub fn add_with<C>(&mut self, raw: &RawValue, convert: &C) -> Result<(), SettingError>
    where
        C: Convert + ?Sized,
    {
        let name = self.name.as_str();
        match &mut self.value {
            Value::Int(current) => {
                let operand = convert.to_int(raw).map_err(type_mismatch(name))?;
                *current = current.saturating_add(operand);
                Ok(())
            }
            Value::Float(current) => {
                *current += convert.to_float(raw).map_err(type_mismatch(name))?;
                Ok(())
            }
            other => Err(unsupported(name, "add", other.kind())),
        }
    }

    /// Multiplies a numeric setting by `raw` using the default converter.
    pub fn multiply(&mut self, raw: impl Into<RawValue>) -> Result<(), SettingError> {
        self.multiply_with(&raw.into(), &StrConvert)
    }

    /// Multiplies the current value of an int or float setting by `raw`.
    ///
    /// The result is not range-checked. Integer arithmetic saturates.
    pub fn multiply_with<C>(&mut self, raw: &RawValue, convert: &C) -> Result<(), SettingError>
    where
        C: Convert + ?Sized,
    {
        let name = self.name.as_str();
        match &mut self.value {
            Value::Int(current) => {
                let operand = convert.to_int(raw).map_err(type_mismatch(name))?;
                *current = current.saturating_mul(operand);
                Ok(())
            }
            Value::Float(current) => {
                *current *= convert.to_float(raw).map_err(type_mismatch(name))?;
                Ok(())
            }
            other => Err(unsupported(name, "multiply", other.kind())),
        }
    }

    /// Moves a thumbnail size to the next larger size, stopping at the largest.
    pub fn increase(&mut self) -> Result<(), SettingError> {
        self.step_thumbnail_size("increase", |index| {
            (index + 1).min(THUMBNAIL_SIZES.len() - 1)
        })
    }

    /// Moves a thumbnail size to the next smaller size, stopping at the smallest.
    pub fn decrease(&mut self) -> Result<(), SettingError> {
        self.step_thumbnail_size("decrease", |index| index.saturating_sub(1))
    }

    fn step_thumbnail_size(
        &mut self,
        operation: &'static str,
        step: impl Fn(usize) -> usize,
    ) -> Result<(), SettingError> {
        match &mut self.value {
            Value::ThumbnailSize(size) => {
                if let Some(index) = THUMBNAIL_SIZES.iter().position(|s| s == size) {
                    *size = THUMBNAIL_SIZES[step(index)];
                }
                Ok(())
            }
            other => Err(unsupported(&self.name, operation, other.kind())),
        }
    }
}

fn type_mismatch(name: &str) -> impl Fn(ConversionError) -> SettingError + '_ {
    move |source| SettingError::TypeMismatch {
        name: name.to_string(),
        source,
    }
}

fn unsupported(name: &str, operation: &'static str, kind: SettingKind) -> SettingError {
    SettingError::UnsupportedOperation {
        name: name.to_string(),
        operation,
        kind,
    }
}

fn checked_thumbnail_size(name: &str, size: i64) -> Result<u32, SettingError> {
    THUMBNAIL_SIZES
        .iter()
        .copied()
        .find(|allowed| i64::from(*allowed) == size)
        .ok_or_else(|| SettingError::DomainViolation {
            name: name.to_string(),
            value: size.to_string(),
            allowed: THUMBNAIL_SIZES
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
