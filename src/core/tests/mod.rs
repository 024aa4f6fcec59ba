//! Core module tests
//!
//! Contains test suites for the shared types:
//! - Mode parsing, display and fallback rules
//! - RawValue conversions
