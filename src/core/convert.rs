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

//! src/core/convert.rs
//!
//! Text-to-typed-value conversion
//!
//! Settings never parse input themselves. They delegate to a `Convert`
//! implementation so the conversion rules live in one place and can be
//! replaced in tests.

use thiserror::Error;

use crate::core::types::RawValue;

/// Input could not be converted to the requested type
#[derive(Clone, Debug, Error, PartialEq)]
#[error("requires value of type {expected}, got '{found}'")]
pub struct ConversionError {
    /// Name of the target type ("bool", "int", "float", "str")
    pub expected: &'static str,
    /// The offending input, rendered as text
    pub found: String,
}

impl ConversionError {
    fn new(expected: &'static str, raw: &RawValue) -> Self {
        Self {
            expected,
            found: raw.describe(),
        }
    }
}

/// Converts raw input into the value types settings store
pub trait Convert {
    fn to_bool(&self, raw: &RawValue) -> Result<bool, ConversionError>;
    fn to_int(&self, raw: &RawValue) -> Result<i64, ConversionError>;
    fn to_float(&self, raw: &RawValue) -> Result<f64, ConversionError>;

    /// Text settings accept text and nothing else.
    fn to_str(&self, raw: &RawValue) -> Result<String, ConversionError> {
        match raw {
            RawValue::Text(text) => Ok(text.clone()),
            other => Err(ConversionError::new("str", other)),
        }
    }
}

/// Default converter used by config files and the CLI
#[derive(Clone, Copy, Debug, Default)]
pub struct StrConvert;

impl Convert for StrConvert {
    /// Accepts `true/yes/on/1` and `false/no/off/0`, case-insensitive
    fn to_bool(&self, raw: &RawValue) -> Result<bool, ConversionError> {
        match raw {
            RawValue::Bool(b) => Ok(*b),
            RawValue::Text(text) => match text.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(ConversionError::new("bool", raw)),
            },
            other => Err(ConversionError::new("bool", other)),
        }
    }

    fn to_int(&self, raw: &RawValue) -> Result<i64, ConversionError> {
        match raw {
            RawValue::Int(i) => Ok(*i),
            RawValue::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| ConversionError::new("int", raw)),
            other => Err(ConversionError::new("int", other)),
        }
    }

    /// Integers are widened; text must parse as a float. The result must
    /// be finite, so NaN and the infinities are rejected.
    fn to_float(&self, raw: &RawValue) -> Result<f64, ConversionError> {
        let value = match raw {
            RawValue::Float(f) => *f,
            RawValue::Int(i) => *i as f64,
            RawValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ConversionError::new("float", raw))?,
            other => return Err(ConversionError::new("float", other)),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConversionError::new("float", raw))
        }
    }
}
