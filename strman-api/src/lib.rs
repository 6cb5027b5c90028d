//! Identifier case conversion
//!
//! Converts identifier-style strings between camelCase, PascalCase,
//! kebab-case, snake_case, their SCREAMING variants and arbitrary
//! delimiter-joined forms. Every conversion tokenizes the input into
//! lowercase words (see [`strman_core::Splitter`]) and joins them again under
//! the target convention.
//!
//! All conversion functions are total: empty, separator-only or symbol-only
//! input degrades to an empty or degenerate result rather than an error.
//!
//! # Example
//!
//! ```rust
//! use strman_api::{split, to_camel, to_pascal, to_screaming_snake};
//!
//! assert_eq!(split("thisIsATest"), ["this", "is", "a", "test"]);
//! assert_eq!(to_camel("split-kebab-case"), "splitKebabCase");
//! assert_eq!(to_pascal("split-kebab-case"), "SplitKebabCase");
//! assert_eq!(to_screaming_snake("splitCamelCase"), "SPLIT_CAMEL_CASE");
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod case;
pub mod config;
pub mod converter;
pub mod error;
pub mod transform;

use transform::{join_words, WordTransform};

// Re-export key types
pub use case::Case;
pub use config::{Config, ConfigBuilder};
pub use converter::Converter;
pub use error::{ApiError, Result};
pub use strman_core::{words, CharClass, Splitter};

const KEBAB_DELIMITER: &str = "-";
const SNAKE_DELIMITER: &str = "_";

/// Split `source` into lowercase words
pub fn split(source: &str) -> Vec<String> {
    words(source).map(|word| word.into_owned()).collect()
}

/// Join lowercase words with `delimiter`
pub fn to_delimited(source: &str, delimiter: &str) -> String {
    join_words(source, WordTransform::Identity, 0, delimiter)
}

/// Join uppercase words with `delimiter`
pub fn to_screaming_delimited(source: &str, delimiter: &str) -> String {
    join_words(source, WordTransform::Uppercase, 0, delimiter)
}

/// Convert to `kebab-case`
pub fn to_kebab(source: &str) -> String {
    to_delimited(source, KEBAB_DELIMITER)
}

/// Convert to `SCREAMING-KEBAB-CASE`
pub fn to_screaming_kebab(source: &str) -> String {
    to_screaming_delimited(source, KEBAB_DELIMITER)
}

/// Convert to `snake_case`
pub fn to_snake(source: &str) -> String {
    to_delimited(source, SNAKE_DELIMITER)
}

/// Convert to `SCREAMING_SNAKE_CASE`
pub fn to_screaming_snake(source: &str) -> String {
    to_screaming_delimited(source, SNAKE_DELIMITER)
}

/// Convert to `camelCase`
pub fn to_camel(source: &str) -> String {
    join_words(source, WordTransform::Capitalize, 1, "")
}

/// Convert to `PascalCase`
pub fn to_pascal(source: &str) -> String {
    join_words(source, WordTransform::Capitalize, 0, "")
}

/// Convert to any style that has its own delimiter
///
/// The generic delimited styles have none, so [`Case::Delimited`] and
/// [`Case::ScreamingDelimited`] fall back to `.` here. Use a
/// [`Converter`] to pick another delimiter.
pub fn convert(source: &str, case: Case) -> String {
    let delimiter = case.default_delimiter().unwrap_or(".");
    join_words(source, case.word_transform(), case.skip(), delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_scenarios() {
        assert_eq!(to_camel("split-kebab-case"), "splitKebabCase");
        assert_eq!(to_pascal("split-kebab-case"), "SplitKebabCase");
        assert_eq!(to_screaming_snake("splitCamelCase"), "SPLIT_CAMEL_CASE");
    }

    #[test]
    fn test_symbol_survives_as_word() {
        assert_eq!(
            to_delimited("lorem.ipsum.$.sat.12", "."),
            "lorem.ipsum.$.sat.12"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert_eq!(to_camel(""), "");
        assert_eq!(to_pascal(""), "");
        assert_eq!(to_kebab(""), "");
        assert_eq!(to_screaming_delimited("", "."), "");
    }

    #[test]
    fn test_convert_matches_named_functions() {
        let source = "someMixed_INPUT-42";
        assert_eq!(convert(source, Case::Kebab), to_kebab(source));
        assert_eq!(
            convert(source, Case::ScreamingKebab),
            to_screaming_kebab(source)
        );
        assert_eq!(convert(source, Case::Snake), to_snake(source));
        assert_eq!(
            convert(source, Case::ScreamingSnake),
            to_screaming_snake(source)
        );
        assert_eq!(convert(source, Case::Camel), to_camel(source));
        assert_eq!(convert(source, Case::Pascal), to_pascal(source));
        assert_eq!(convert(source, Case::Delimited), to_delimited(source, "."));
        assert_eq!(
            convert(source, Case::ScreamingDelimited),
            to_screaming_delimited(source, ".")
        );
    }
}
