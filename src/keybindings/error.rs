use thiserror::Error;

use crate::core::Mode;

/// Errors raised by the binding table.
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    /// Neither the mode's own table nor its fallback holds the sequence.
    #[error("No binding found for '{keys}' in {mode} mode")]
    NotFound { keys: String, mode: Mode },
}
