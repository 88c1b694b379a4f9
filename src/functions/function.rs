//! The capability every pipeline string function implements.
//!
//! A function is described by a static `FunctionDescriptor` and computes its
//! result through `StringFunction::apply`. Callers never use `apply` directly;
//! they go through `invoke`, which handles absent values and picks the
//! effective locale the same way for every function.

use crate::locale::{Locale, ROOT};

/// Parameter name of the subject string.
pub const VALUE_PARAM: &str = "value";

/// Parameter name of the optional locale tag.
pub const LOCALE_PARAM: &str = "locale";

/// Type of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
}

/// Declaration of one function parameter, as seen by rule authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub kind: ParamKind,
    pub optional: bool,
    pub description: &'static str,
}

const VALUE: ParameterDescriptor = ParameterDescriptor {
    name: VALUE_PARAM,
    kind: ParamKind::String,
    optional: false,
    description: "The string to convert",
};

const LOCALE: ParameterDescriptor = ParameterDescriptor {
    name: LOCALE_PARAM,
    kind: ParamKind::String,
    optional: true,
    description: "Locale tag whose case rules apply, defaults to the root locale",
};

const VALUE_ONLY: &[ParameterDescriptor] = &[VALUE];
const VALUE_AND_LOCALE: &[ParameterDescriptor] = &[VALUE, LOCALE];

/// Immutable metadata of a string function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Registry key used by rule scripts (e.g., "uppercase")
    pub name: &'static str,
    /// Human-readable summary
    pub description: &'static str,
    /// Whether `invoke` consults a locale argument
    pub locale_aware: bool,
    /// Declared parameters, in call order
    pub params: &'static [ParameterDescriptor],
    /// Optional example usage
    pub example: Option<&'static str>,
}

impl FunctionDescriptor {
    /// Descriptor for a function taking only `value`.
    pub const fn plain(
        name: &'static str,
        description: &'static str,
        example: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            description,
            locale_aware: false,
            params: VALUE_ONLY,
            example,
        }
    }

    /// Descriptor for a function taking `value` and an optional `locale`.
    pub const fn locale_aware(
        name: &'static str,
        description: &'static str,
        example: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            description,
            locale_aware: true,
            params: VALUE_AND_LOCALE,
            example,
        }
    }

    /// Render a signature line such as `(value: string, locale?: string) -> string`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| {
                let marker = if p.optional { "?" } else { "" };
                format!("{}{}: {}", p.name, marker, p.kind.as_str())
            })
            .collect();
        format!("({}) -> string", params.join(", "))
    }
}

impl ParamKind {
    fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
        }
    }
}

/// A named, pure, single-argument string function.
///
/// Implementations hold no mutable state, so a single instance may be shared
/// across threads and invoked concurrently.
pub trait StringFunction: Send + Sync {
    /// Static metadata for this function.
    fn descriptor(&self) -> &'static FunctionDescriptor;

    /// The transform itself.
    ///
    /// `locale` is `Some` exactly when the function is locale-aware.
    fn apply(&self, value: &str, locale: Option<&Locale>) -> String;

    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    fn description(&self) -> &'static str {
        self.descriptor().description
    }

    fn is_locale_aware(&self) -> bool {
        self.descriptor().locale_aware
    }

    /// Evaluate the function for a rule.
    ///
    /// An absent `value` yields an absent result without running the
    /// transform. Locale-aware functions use `locale` or, when it is absent,
    /// [`Locale::ROOT`]; other functions ignore `locale` entirely.
    ///
    /// Implementors should not override this.
    fn invoke(&self, value: Option<&str>, locale: Option<&Locale>) -> Option<String> {
        let value = value?;
        let effective = if self.is_locale_aware() {
            Some(locale.unwrap_or(&ROOT))
        } else {
            None
        };
        Some(self.apply(value, effective))
    }
}

impl std::fmt::Debug for dyn StringFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringFunction")
            .field("name", &self.name())
            .field("locale_aware", &self.is_locale_aware())
            .finish()
    }
}
