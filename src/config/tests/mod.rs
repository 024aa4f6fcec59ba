//! Config module tests
//!
//! Contains test suites for:
//! - ConfigManager directory handling and backups
//! - Loading and rendering settings and keybindings
//! - ConfigTransaction commit and rollback
