//! Settings module tests
//!
//! Contains test suites for:
//! - Individual setting operations (override, toggle, arithmetic, sizes)
//! - Registry lookup, registration and reset

#[cfg(test)]
mod setting_tests;
