//! Built-in case conversion functions, keyed by name.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use super::case::{Capitalize, Lowercase, SwapCase, Uncapitalize, Uppercase};
use super::function::StringFunction;

/// All built-in functions, lazily initialized.
pub static BUILTINS: LazyLock<HashMap<&'static str, Arc<dyn StringFunction>>> =
    LazyLock::new(|| {
        let defs: Vec<Arc<dyn StringFunction>> = vec![
            Arc::new(Uppercase),
            Arc::new(Lowercase),
            Arc::new(Capitalize),
            Arc::new(Uncapitalize),
            Arc::new(SwapCase),
        ];

        defs.into_iter().map(|f| (f.name(), f)).collect()
    });

/// Check if a name is a built-in function.
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains_key(name)
}

/// Get a built-in function by name.
pub fn get_builtin(name: &str) -> Option<Arc<dyn StringFunction>> {
    BUILTINS.get(name).map(Arc::clone)
}
