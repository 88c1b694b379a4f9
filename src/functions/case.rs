//! Case conversion functions.
//!
//! `uppercase` and `lowercase` apply the full Unicode case mappings, including
//! multi-character expansions and the Turkish, Azeri and Lithuanian
//! tailorings. The single-character functions (`capitalize`, `uncapitalize`,
//! `swapcase`) use simple per-character mappings and ignore locale.

use icu_casemap::CaseMapper;

use super::function::{FunctionDescriptor, StringFunction};
use crate::locale::{Locale, ROOT};

const CASE_MAPPER: CaseMapper = CaseMapper::new();

/// Pick the case-mapping rules for a call. Locale-aware functions always
/// receive `Some`, but stay total if a caller goes around `invoke`.
fn rules(locale: Option<&Locale>) -> &Locale {
    locale.unwrap_or(&ROOT)
}

/// `uppercase(value, locale?)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Uppercase {
    pub const NAME: &'static str = "uppercase";
}

static UPPERCASE: FunctionDescriptor = FunctionDescriptor::locale_aware(
    Uppercase::NAME,
    "Uppercases a string using the case rules of the given locale",
    Some("uppercase(\"istanbul\", \"tr\") == \"İSTANBUL\""),
);

impl StringFunction for Uppercase {
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &UPPERCASE
    }

    fn apply(&self, value: &str, locale: Option<&Locale>) -> String {
        CASE_MAPPER.uppercase_to_string(value, rules(locale).as_langid())
    }
}

/// `lowercase(value, locale?)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Lowercase {
    pub const NAME: &'static str = "lowercase";
}

static LOWERCASE: FunctionDescriptor = FunctionDescriptor::locale_aware(
    Lowercase::NAME,
    "Lowercases a string using the case rules of the given locale",
    Some("lowercase(\"TITLE\", \"tr\") == \"tıtle\""),
);

impl StringFunction for Lowercase {
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &LOWERCASE
    }

    fn apply(&self, value: &str, locale: Option<&Locale>) -> String {
        CASE_MAPPER.lowercase_to_string(value, rules(locale).as_langid())
    }
}

/// `capitalize(value)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Capitalize;

impl Capitalize {
    pub const NAME: &'static str = "capitalize";
}

static CAPITALIZE: FunctionDescriptor = FunctionDescriptor::plain(
    Capitalize::NAME,
    "Capitalizes a string, changing the first character to title case",
    Some("capitalize(\"hello world\") == \"Hello world\""),
);

impl StringFunction for Capitalize {
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &CAPITALIZE
    }

    fn apply(&self, value: &str, _locale: Option<&Locale>) -> String {
        map_first_char(value, |c| CASE_MAPPER.simple_titlecase(c))
    }
}

/// `uncapitalize(value)`
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncapitalize;

impl Uncapitalize {
    pub const NAME: &'static str = "uncapitalize";
}

static UNCAPITALIZE: FunctionDescriptor = FunctionDescriptor::plain(
    Uncapitalize::NAME,
    "Uncapitalizes a string, changing the first character to lower case",
    Some("uncapitalize(\"Hello World\") == \"hello World\""),
);

impl StringFunction for Uncapitalize {
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &UNCAPITALIZE
    }

    fn apply(&self, value: &str, _locale: Option<&Locale>) -> String {
        map_first_char(value, |c| CASE_MAPPER.simple_lowercase(c))
    }
}

/// `swapcase(value)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapCase;

impl SwapCase {
    pub const NAME: &'static str = "swapcase";
}

static SWAPCASE: FunctionDescriptor = FunctionDescriptor::plain(
    SwapCase::NAME,
    "Swaps the case of every character: upper and title case become lower case, lower case becomes upper case",
    Some("swapcase(\"Hello World\") == \"hELLO wORLD\""),
);

impl StringFunction for SwapCase {
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &SWAPCASE
    }

    fn apply(&self, value: &str, _locale: Option<&Locale>) -> String {
        value.chars().map(swap_char).collect()
    }
}

fn swap_char(c: char) -> char {
    let mapper = CASE_MAPPER;
    let lower = mapper.simple_lowercase(c);
    if c.is_uppercase() || lower != c {
        // Uppercase and titlecase letters
        lower
    } else if c.is_lowercase() {
        mapper.simple_uppercase(c)
    } else {
        c
    }
}

fn map_first_char(value: &str, f: impl Fn(char) -> char) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            out.push(f(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tr() -> Locale {
        Locale::parse("tr").unwrap()
    }

    #[test]
    fn uppercase_metadata() {
        assert_eq!(Uppercase.name(), "uppercase");
        assert!(Uppercase.is_locale_aware());
        assert!(!Uppercase.description().is_empty());
    }

    #[test]
    fn uppercase_ascii() {
        assert_eq!(Uppercase.invoke(Some("hello"), None).unwrap(), "HELLO");
        assert_eq!(Uppercase.invoke(Some("ABC"), None).unwrap(), "ABC");
    }

    #[test]
    fn uppercase_accented() {
        assert_eq!(Uppercase.invoke(Some("café"), None).unwrap(), "CAFÉ");
    }

    #[test]
    fn uppercase_turkish_dotted_i() {
        assert_eq!(
            Uppercase.invoke(Some("istanbul"), Some(&tr())).unwrap(),
            "İSTANBUL"
        );
        assert_eq!(
            Uppercase.invoke(Some("istanbul"), None).unwrap(),
            "ISTANBUL"
        );
    }

    #[test]
    fn uppercase_dotless_i_maps_to_plain_i() {
        assert_eq!(Uppercase.invoke(Some("ı"), None).unwrap(), "I");
        assert_eq!(Uppercase.invoke(Some("ı"), Some(&tr())).unwrap(), "I");
    }

    #[test]
    fn uppercase_expands_sharp_s() {
        let out = Uppercase.invoke(Some("straße"), None).unwrap();
        assert_eq!(out, "STRASSE");
        assert!(out.chars().count() > "straße".chars().count());
    }

    #[test]
    fn uppercase_passes_through_caseless() {
        assert_eq!(
            Uppercase.invoke(Some("123 -_! 日本"), None).unwrap(),
            "123 -_! 日本"
        );
    }

    #[test]
    fn uppercase_lithuanian_drops_dot_above() {
        let lt = Locale::parse("lt").unwrap();
        assert_eq!(Uppercase.invoke(Some("i\u{307}"), Some(&lt)).unwrap(), "I");
        assert_eq!(Uppercase.invoke(Some("i\u{307}"), None).unwrap(), "I\u{307}");
    }

    #[test]
    fn uppercase_keeps_turkish_rules_for_extended_tags() {
        let locale = Locale::from_tag_or_root("tr-TR-u-ca-gregory");
        assert_eq!(
            Uppercase.invoke(Some("istanbul"), Some(&locale)).unwrap(),
            "İSTANBUL"
        );
    }

    #[test]
    fn uppercase_empty() {
        assert_eq!(Uppercase.invoke(Some(""), Some(&tr())).unwrap(), "");
    }

    #[test]
    fn uppercase_absent() {
        assert_eq!(Uppercase.invoke(None, Some(&tr())), None);
    }

    #[test]
    fn lowercase_turkish_dotless_i() {
        assert_eq!(
            Lowercase.invoke(Some("TITLE"), Some(&tr())).unwrap(),
            "tıtle"
        );
        assert_eq!(Lowercase.invoke(Some("TITLE"), None).unwrap(), "title");
    }

    #[test]
    fn lowercase_dotted_capital_i() {
        assert_eq!(Lowercase.invoke(Some("İ"), Some(&tr())).unwrap(), "i");
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(
            Capitalize.invoke(Some("hello world"), None).unwrap(),
            "Hello world"
        );
        assert_eq!(Capitalize.invoke(Some("HELLO"), None).unwrap(), "HELLO");
        assert_eq!(Capitalize.invoke(Some(""), None).unwrap(), "");
    }

    #[test]
    fn capitalize_uses_titlecase() {
        // U+01C6 (dž) titlecases to U+01C5 (Dž), not U+01C4 (DŽ)
        assert_eq!(Capitalize.invoke(Some("\u{01C6}x"), None).unwrap(), "\u{01C5}x");
    }

    #[test]
    fn capitalize_ignores_locale() {
        assert!(!Capitalize.is_locale_aware());
        assert_eq!(Capitalize.invoke(Some("izmir"), Some(&tr())).unwrap(), "Izmir");
    }

    #[test]
    fn uncapitalize_first_char_only() {
        assert_eq!(
            Uncapitalize.invoke(Some("Hello World"), None).unwrap(),
            "hello World"
        );
        assert_eq!(Uncapitalize.invoke(Some("ÉTÉ"), None).unwrap(), "éTÉ");
    }

    #[test]
    fn swapcase_mixed() {
        assert_eq!(
            SwapCase.invoke(Some("Hello World 42"), None).unwrap(),
            "hELLO wORLD 42"
        );
        assert_eq!(SwapCase.invoke(Some("\u{01C5}"), None).unwrap(), "\u{01C6}");
    }

    #[test]
    fn plain_functions_propagate_absent() {
        assert_eq!(Capitalize.invoke(None, None), None);
        assert_eq!(Uncapitalize.invoke(None, None), None);
        assert_eq!(SwapCase.invoke(None, None), None);
    }
}
