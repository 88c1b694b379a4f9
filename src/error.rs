//! Error types for locale parsing and function registration.

use thiserror::Error;

/// A locale tag that could not be turned into a [`crate::Locale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,

    #[error("invalid locale tag '{tag}': {reason}")]
    Invalid { tag: String, reason: String },
}

/// Errors raised by [`crate::FunctionRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function name must not be empty")]
    EmptyName,

    #[error("function already registered: {0}")]
    DuplicateName(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),
}
