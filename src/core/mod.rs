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

//! src/core/mod.rs
//!
//! Shared building blocks
//!
//! This module contains the types both subsystems agree on:
//! - `Mode`, the enumerated application context
//! - `RawValue`, the untyped input of an override
//! - The `Convert` trait and its default `StrConvert` implementation
//!
//! Nothing here touches the filesystem or the UI toolkit.

pub mod convert;
pub mod types;

pub use convert::{ConversionError, Convert, StrConvert};
pub use types::*;

#[cfg(test)]
mod tests;
