use thiserror::Error;

use crate::core::ConversionError;
use crate::settings::setting::SettingKind;

/// Errors raised by settings and the settings registry.
///
/// Every variant leaves the affected value untouched.
#[derive(Debug, Error, PartialEq)]
pub enum SettingError {
    /// No setting is registered under this name.
    #[error("No setting called '{0}'")]
    NotFound(String),
    /// The input could not be converted to the setting's type.
    #[error("Setting '{name}' {source}")]
    TypeMismatch {
        name: String,
        #[source]
        source: ConversionError,
    },
    /// The input parsed but lies outside the allowed values.
    #[error("Setting '{name}': value {value} must be one of {allowed}")]
    DomainViolation {
        name: String,
        value: String,
        allowed: String,
    },
    /// Two settings were registered under the same name.
    #[error("Setting '{0}' is already registered")]
    DuplicateRegistration(String),
    /// The operation is not defined for this kind of setting.
    #[error("Setting '{name}' of type {kind} does not support {operation}")]
    UnsupportedOperation {
        name: String,
        operation: &'static str,
        kind: SettingKind,
    },
}
