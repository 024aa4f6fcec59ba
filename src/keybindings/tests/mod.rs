//! Keybinding module tests
//!
//! Contains test suites for:
//! - Binding table precedence, unbind promotion and partial matching
//! - Keystroke buffering
//! - Key sequence validation

#[cfg(test)]
mod table_tests;
