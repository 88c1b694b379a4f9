//! Name-keyed function registry.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::RegistryError;
use crate::functions::{StringFunction, BUILTINS};
use crate::locale::Locale;

/// Thread-safe mapping from function name to function.
///
/// Names are unique: the first registration of a name wins and later ones
/// are rejected.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: DashMap<&'static str, Arc<dyn StringFunction>>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: DashMap::new(),
        }
    }

    /// Create a registry holding every built-in function.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for (name, function) in BUILTINS.iter() {
            registry.functions.insert(*name, Arc::clone(function));
        }
        registry
    }

    /// Register a function under its own name.
    pub fn register(&self, function: Arc<dyn StringFunction>) -> Result<(), RegistryError> {
        let name = function.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        match self.functions.entry(name) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateName(name.to_string())),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    function = name,
                    locale_aware = function.is_locale_aware(),
                    "registered function"
                );
                slot.insert(function);
                Ok(())
            }
        }
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn StringFunction>> {
        self.functions.get(name).map(|r| Arc::clone(&r))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.iter().map(|r| *r.key()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Look up `name` and invoke it.
    pub fn invoke(
        &self,
        name: &str,
        value: Option<&str>,
        locale: Option<&Locale>,
    ) -> Result<Option<String>, RegistryError> {
        let function = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFunction(name.to_string()))?;
        Ok(function.invoke(value, locale))
    }
}
