//! Locale identifiers used to select case-mapping rules.
//!
//! A `Locale` is an opaque, already-validated language identifier. Rule
//! scripts hand us BCP-47 style tags (`tr`, `tr-TR`, and the Java-flavoured
//! `tr_TR` all occur in the wild), so parsing accepts either separator.
//! Extension and private-use subtags (`-u-ca-gregory`, `-x-...`) are accepted
//! and dropped, since case mapping only depends on the language identifier.

use std::fmt;
use std::str::FromStr;

use icu_locid::{LanguageIdentifier, Locale as IcuLocale};
use serde::Deserialize;

use crate::error::LocaleError;

/// A language/region/variant identifier governing case-mapping rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// The root (undetermined) locale. Used whenever a locale-aware function
    /// is called without an explicit locale, independent of the host.
    pub const ROOT: Locale = Locale(LanguageIdentifier::UND);

    /// Parse a locale tag.
    ///
    /// Surrounding whitespace is ignored and `_` is accepted as a subtag
    /// separator. Extensions are parsed but not kept. An empty tag is an
    /// error rather than an alias for root.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }

        let normalized = trimmed.replace('_', "-");
        normalized
            .parse::<IcuLocale>()
            .map(|locale| Locale(locale.id))
            .map_err(|e| LocaleError::Invalid {
                tag: tag.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse a locale tag, substituting [`Locale::ROOT`] for anything that
    /// does not parse.
    pub fn from_tag_or_root(tag: &str) -> Self {
        match Self::parse(tag) {
            Ok(locale) => locale,
            Err(LocaleError::Empty) => Self::ROOT,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to root locale");
                Self::ROOT
            }
        }
    }

    /// Whether this is the root locale.
    pub fn is_root(&self) -> bool {
        self.0 == LanguageIdentifier::UND
    }

    pub(crate) fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }
}

/// Addressable copy of [`Locale::ROOT`] for handing out `'static` borrows.
pub(crate) static ROOT: Locale = Locale::ROOT;

impl Default for Locale {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_only() {
        let locale = Locale::parse("tr").unwrap();
        assert_eq!(locale.to_string(), "tr");
        assert!(!locale.is_root());
    }

    #[test]
    fn parses_language_and_region() {
        assert_eq!(Locale::parse("tr-TR").unwrap().to_string(), "tr-TR");
    }

    #[test]
    fn accepts_underscore_separator() {
        assert_eq!(
            Locale::parse("tr_TR").unwrap(),
            Locale::parse("tr-TR").unwrap()
        );
    }

    #[test]
    fn keeps_language_of_extended_tags() {
        for tag in ["tr-TR-u-ca-gregory", "tr-TR-x-pipeline", "tr_TR_u_nu_latn"] {
            assert_eq!(Locale::parse(tag).unwrap().to_string(), "tr-TR", "{tag}");
        }
        assert_eq!(Locale::parse("tr-u-nu-latn").unwrap().to_string(), "tr");
        assert_eq!(Locale::from_tag_or_root("tr-TR-u-ca-gregory").to_string(), "tr-TR");
    }

    #[test]
    fn keeps_script_and_variant() {
        assert_eq!(Locale::parse("tr-Latn-TR").unwrap().to_string(), "tr-Latn-TR");
        assert_eq!(
            Locale::parse("de-DE-1996").unwrap().to_string(),
            "de-DE-1996"
        );
    }

    #[test]
    fn und_is_root() {
        assert!(Locale::parse("und").unwrap().is_root());
        assert!(Locale::ROOT.is_root());
        assert_eq!(Locale::default(), Locale::ROOT);
    }

    #[test]
    fn rejects_empty_tag() {
        assert_eq!(Locale::parse(""), Err(LocaleError::Empty));
        assert_eq!(Locale::parse("   "), Err(LocaleError::Empty));
    }

    #[test]
    fn rejects_malformed_tag() {
        let err = Locale::parse("not a locale!").unwrap_err();
        assert!(matches!(err, LocaleError::Invalid { .. }));
        assert!(err.to_string().contains("not a locale!"));
    }

    #[test]
    fn malformed_tag_falls_back_to_root() {
        assert_eq!(Locale::from_tag_or_root("@@@"), Locale::ROOT);
        assert_eq!(Locale::from_tag_or_root(""), Locale::ROOT);
        assert_eq!(Locale::from_tag_or_root("lt").to_string(), "lt");
    }

    #[test]
    fn from_str_goes_through_parse() {
        let locale: Locale = "az".parse().unwrap();
        assert_eq!(locale.to_string(), "az");
        assert!("".parse::<Locale>().is_err());
    }
}
