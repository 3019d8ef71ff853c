//! Naming convention utilities for code generation.
//!
//! JSON keys are arbitrary strings; generated code needs identifiers. Everything
//! here is a pure string transform.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`upper_first`] | `Word` |
//! | `Word` | [`lower_first`] | `word` |
//! | `snake_case` | [`snake_to_camel`] | `snakeCase` |
//! | `first-name` | [`identifier`] | `firstName` |
//! | `home_address` | [`type_name`] (camel style) | `HomeAddress` |

use once_cell::sync::Lazy;
use regex::Regex;

// characters that can't appear in an identifier act as word breaks
static WORD_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static pattern"));

/// How property identifiers are derived from JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentStyle {
    /// Lowercase the first character only; underscores survive.
    LowerFirst,
    /// Snake case becomes camel case.
    Camel,
}

/// What to do when two positions produce the same type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameCollision {
    /// The later declaration replaces the earlier one (in the earlier one's slot).
    #[default]
    Overwrite,
    /// Later names get `2`, `3`, ... appended.
    Suffix,
}

/// Per-convention naming inputs for the registry.
#[derive(Debug, Clone)]
pub struct NamingOptions {
    pub prefix: String,
    pub style: IdentStyle,
    pub reserved_words: &'static [&'static str],
    pub reserved_type_names: &'static [&'static str],
    /// Leading words an identifier must not start with as a whole camel-case word.
    pub reserved_leading_words: &'static [&'static str],
    pub collisions: NameCollision,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            style: IdentStyle::LowerFirst,
            reserved_words: &[],
            reserved_type_names: &[],
            reserved_leading_words: &[],
            collisions: NameCollision::Overwrite,
        }
    }
}

/// Uppercase the first character.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert snake_case to camelCase.
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    WORD_BREAK.split(s).filter(|w| !w.is_empty())
}

/// Property identifier for a JSON key.
pub fn identifier(key: &str, style: IdentStyle, reserved: &[&str]) -> String {
    let mut out = String::new();
    for (i, w) in words(key).enumerate() {
        if i == 0 {
            out.push_str(&lower_first(w));
        } else {
            out.push_str(&upper_first(w));
        }
    }
    if style == IdentStyle::Camel {
        out = lower_first(&snake_to_camel(&out));
    }
    if out.chars().all(|c| c == '_') {
        return "field".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "field");
    }
    if reserved.contains(&out.as_str()) {
        out.push_str("Value");
    }
    out
}

/// Prefix `the` when `ident` starts with one of `words` followed by a
/// non-lowercase character or the end: `newTitle` becomes `theNewTitle`, while
/// `newsFeed` is left alone. Leading underscores are ignored when matching.
pub fn avoid_leading_words(ident: String, words: &[&str]) -> String {
    let bare = ident.trim_start_matches('_');
    let hit = words.iter().any(|word| {
        bare.strip_prefix(word)
            .is_some_and(|rest| !rest.starts_with(|c: char| c.is_ascii_lowercase()))
    });
    if hit { format!("the{}", upper_first(&ident)) } else { ident }
}

/// Type name for an object reached through `key` (or the root base name).
pub fn type_name(key: &str, opts: &NamingOptions) -> String {
    let mut name: String = words(key).map(upper_first).collect();
    if opts.style == IdentStyle::Camel {
        name = upper_first(&snake_to_camel(&name));
    }
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "Model");
    } else if opts.reserved_type_names.contains(&name.as_str()) {
        name.push_str("Model");
    }
    format!("{}{}", opts.prefix, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn first_char_case() {
        assert_eq!(upper_first("hello"), "Hello");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("ID"), "iD");
        assert_eq!(lower_first("Name"), "name");
    }

    #[test]
    fn snake_to_camel_converts() {
        assert_eq!(snake_to_camel("hello_world"), "helloWorld");
        assert_eq!(snake_to_camel("foo__bar"), "fooBar");
        assert_eq!(snake_to_camel("simple"), "simple");
    }

    #[test_case("name", IdentStyle::LowerFirst, "name")]
    #[test_case("Name", IdentStyle::LowerFirst, "name")]
    #[test_case("first_name", IdentStyle::LowerFirst, "first_name")]
    #[test_case("first_name", IdentStyle::Camel, "firstName")]
    #[test_case("first-name", IdentStyle::LowerFirst, "firstName")]
    #[test_case("content type", IdentStyle::Camel, "contentType")]
    #[test_case("@id", IdentStyle::LowerFirst, "id")]
    #[test_case("1st", IdentStyle::LowerFirst, "field1st")]
    #[test_case("", IdentStyle::Camel, "field")]
    #[test_case("---", IdentStyle::Camel, "field")]
    #[test_case("_leading", IdentStyle::Camel, "leading")]
    #[test_case("__", IdentStyle::LowerFirst, "field")]
    #[test_case("user_ID", IdentStyle::Camel, "userID")]
    fn identifier_from_key(key: &str, style: IdentStyle, expected: &str) {
        assert_eq!(identifier(key, style, &[]), expected);
    }

    #[test]
    fn reserved_words_get_suffix() {
        assert_eq!(identifier("class", IdentStyle::LowerFirst, &["class"]), "classValue");
        assert_eq!(identifier("Class", IdentStyle::LowerFirst, &["class"]), "classValue");
    }

    #[test_case("newTitle", "theNewTitle")]
    #[test_case("new", "theNew")]
    #[test_case("initValue", "theInitValue")]
    #[test_case("copy2", "theCopy2")]
    #[test_case("mutableCopyItems", "theMutableCopyItems")]
    #[test_case("_allocCount", "the_allocCount")]
    #[test_case("newsFeed", "newsFeed")]
    #[test_case("copyright", "copyright")]
    #[test_case("title", "title")]
    fn leading_words_get_prefixed(ident: &str, expected: &str) {
        let words = &["alloc", "copy", "mutableCopy", "new", "init"];
        assert_eq!(avoid_leading_words(ident.to_string(), words), expected);
    }

    #[test]
    fn type_names() {
        let plain = NamingOptions::default();
        assert_eq!(type_name("address", &plain), "Address");
        assert_eq!(type_name("home_address", &plain), "Home_address");

        let camel = NamingOptions { style: IdentStyle::Camel, ..NamingOptions::default() };
        assert_eq!(type_name("home_address", &camel), "HomeAddress");

        let prefixed = NamingOptions {
            prefix: "XY".into(),
            reserved_type_names: &["String"],
            ..NamingOptions::default()
        };
        assert_eq!(type_name("string", &prefixed), "XYStringModel");
        assert_eq!(type_name("404", &prefixed), "XYModel404");
    }
}
