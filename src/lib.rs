//! Locale-aware case conversion functions for log pipeline rules.
//!
//! A rule evaluator looks functions up by name and calls
//! [`StringFunction::invoke`] with the subject value and, for locale-aware
//! functions, an optional [`Locale`]:
//!
//! ```
//! use pipeline_case::{FunctionRegistry, Locale, StringFunction};
//!
//! let registry = FunctionRegistry::with_builtins();
//! let tr = Locale::parse("tr").unwrap();
//!
//! let upper = registry.get("uppercase").unwrap();
//! assert_eq!(upper.invoke(Some("istanbul"), Some(&tr)).as_deref(), Some("İSTANBUL"));
//! assert_eq!(upper.invoke(Some("istanbul"), None).as_deref(), Some("ISTANBUL"));
//! assert_eq!(upper.invoke(None, Some(&tr)), None);
//! ```

mod error;
mod functions;
mod locale;
mod registry;
pub(crate) mod settings;

pub use error::{LocaleError, RegistryError};
pub use functions::{
    get_builtin, is_builtin, Capitalize, FunctionDescriptor, Lowercase, ParamKind,
    ParameterDescriptor, StringFunction, SwapCase, Uncapitalize, Uppercase, BUILTINS,
    LOCALE_PARAM, VALUE_PARAM,
};
pub use locale::Locale;
pub use registry::FunctionRegistry;
pub use settings::{build_registry, load_settings, FunctionSettings, LocaleSettings, Settings};
