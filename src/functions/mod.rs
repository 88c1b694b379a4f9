//! Pipeline string functions.
//!
//! This module provides:
//! - `StringFunction`, the capability every function implements, and its
//!   `FunctionDescriptor` metadata
//! - The case conversion functions (`uppercase`, `lowercase`, `capitalize`,
//!   `uncapitalize`, `swapcase`)
//! - A lazily built table of the built-in functions

mod builtins;
mod case;
mod function;

pub use builtins::{get_builtin, is_builtin, BUILTINS};
pub use case::{Capitalize, Lowercase, SwapCase, Uncapitalize, Uppercase};
pub use function::{
    FunctionDescriptor, ParamKind, ParameterDescriptor, StringFunction, LOCALE_PARAM, VALUE_PARAM,
};
