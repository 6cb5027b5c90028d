//! Case style identifiers

use crate::error::ApiError;
use crate::transform::WordTransform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target casing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Case {
    /// Lowercase words joined by a caller-chosen delimiter
    Delimited,
    /// Uppercase words joined by a caller-chosen delimiter
    ScreamingDelimited,
    /// `kebab-case`
    Kebab,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebab,
    /// `snake_case`
    #[default]
    Snake,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
}

impl Case {
    /// Every case style
    pub const ALL: [Case; 8] = [
        Case::Delimited,
        Case::ScreamingDelimited,
        Case::Kebab,
        Case::ScreamingKebab,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Camel,
        Case::Pascal,
    ];

    /// Canonical name, as accepted in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Case::Delimited => "delimited",
            Case::ScreamingDelimited => "screaming-delimited",
            Case::Kebab => "kebab",
            Case::ScreamingKebab => "screaming-kebab",
            Case::Snake => "snake",
            Case::ScreamingSnake => "screaming-snake",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
        }
    }

    /// Delimiter implied by the style
    ///
    /// `None` for the generic delimited styles, which need one supplied.
    pub fn default_delimiter(self) -> Option<&'static str> {
        match self {
            Case::Delimited | Case::ScreamingDelimited => None,
            Case::Kebab | Case::ScreamingKebab => Some("-"),
            Case::Snake | Case::ScreamingSnake => Some("_"),
            Case::Camel | Case::Pascal => Some(""),
        }
    }

    /// Transform applied to each word
    pub fn word_transform(self) -> WordTransform {
        match self {
            Case::Delimited | Case::Kebab | Case::Snake => WordTransform::Identity,
            Case::ScreamingDelimited | Case::ScreamingKebab | Case::ScreamingSnake => {
                WordTransform::Uppercase
            }
            Case::Camel | Case::Pascal => WordTransform::Capitalize,
        }
    }

    /// Number of leading words left untransformed
    pub fn skip(self) -> usize {
        match self {
            Case::Camel => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = ApiError;

    /// Parse a case style name written in any convention
    ///
    /// `snake_case`, `SCREAMING-SNAKE`, `PascalCase` and `camel` are all
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = crate::to_kebab(s);
        let key = key.strip_suffix("-case").unwrap_or(&key);

        Case::ALL
            .into_iter()
            .find(|case| case.name() == key)
            .ok_or_else(|| ApiError::UnknownCase(s.to_string()))
    }
}

impl TryFrom<String> for Case {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Case> for String {
    fn from(case: Case) -> Self {
        case.name().to_string()
    }
}
