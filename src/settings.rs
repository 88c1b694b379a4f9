//! Settings infrastructure for pipeline functions.
//!
//! This module provides support for loading and parsing settings.toml files
//! that set the pipeline-wide default locale and disable built-in functions.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::functions::{is_builtin, BUILTINS};
use crate::locale::Locale;
use crate::registry::FunctionRegistry;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Locale configuration.
    pub locale: Option<LocaleSettings>,

    /// Function configuration.
    pub functions: Option<FunctionSettings>,
}

/// Locale settings.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleSettings {
    /// Pipeline-wide default locale tag, used when a rule gives none.
    /// Unset means the root locale.
    pub default: Option<String>,
}

/// Function settings.
#[derive(Debug, Default, Deserialize)]
pub struct FunctionSettings {
    /// Built-in functions that are not registered.
    pub disabled: Option<Vec<String>>,
}

impl Settings {
    /// The configured pipeline-wide default locale.
    ///
    /// A malformed tag resolves to the root locale.
    pub fn default_locale(&self) -> Option<Locale> {
        let tag = self.locale.as_ref()?.default.as_deref()?;
        Some(Locale::from_tag_or_root(tag))
    }

    /// Locale to pass to a function call: the rule's explicit tag if there is
    /// one, otherwise the pipeline default.
    pub fn resolve_locale(&self, explicit: Option<&str>) -> Option<Locale> {
        match explicit {
            Some(tag) => Some(Locale::from_tag_or_root(tag)),
            None => self.default_locale(),
        }
    }

    fn disabled(&self) -> &[String] {
        self.functions
            .as_ref()
            .and_then(|f| f.disabled.as_deref())
            .unwrap_or(&[])
    }
}

/// Load settings from a settings.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse settings.toml"
                );
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Build a registry of the built-in functions that settings leave enabled.
pub fn build_registry(settings: &Settings) -> FunctionRegistry {
    let disabled = settings.disabled();
    for name in disabled {
        if !is_builtin(name) {
            tracing::warn!(function = %name, "cannot disable unknown function");
        }
    }

    let registry = FunctionRegistry::new();
    for (name, function) in BUILTINS.iter() {
        if disabled.iter().any(|d| d.as_str() == *name) {
            continue;
        }
        if let Err(e) = registry.register(Arc::clone(function)) {
            tracing::warn!(error = %e, "skipping function");
        }
    }
    registry
}
