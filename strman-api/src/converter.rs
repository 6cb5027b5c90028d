//! Reusable conversion to one target style

use crate::case::Case;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::transform::{collect_words, join, WordTransform};

/// Converts identifiers to a fixed target style
///
/// The converter only holds the style description. It has no scan state and
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    case: Case,
    word_transform: WordTransform,
    skip: usize,
    delimiter: String,
}

impl Converter {
    /// Create a converter using the style's own delimiter
    ///
    /// Fails for [`Case::Delimited`] and [`Case::ScreamingDelimited`], which
    /// have no implied delimiter; use [`Converter::with_delimiter`] for those.
    pub fn new(case: Case) -> Result<Self> {
        let Some(delimiter) = case.default_delimiter() else {
            let message = format!("case style '{case}' requires a delimiter");
            return Err(ApiError::Config(message));
        };
        Ok(Self::with_delimiter(case, delimiter))
    }

    /// Create a converter joining words with `delimiter`
    pub fn with_delimiter(case: Case, delimiter: impl Into<String>) -> Self {
        Self {
            case,
            word_transform: case.word_transform(),
            skip: case.skip(),
            delimiter: delimiter.into(),
        }
    }

    /// Create a converter from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        match &config.delimiter {
            Some(delimiter) => Ok(Self::with_delimiter(config.case, delimiter.as_str())),
            None => Self::new(config.case),
        }
    }

    /// Target case style
    pub fn case(&self) -> Case {
        self.case
    }

    /// Delimiter placed between words
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Convert one identifier
    pub fn convert(&self, source: &str) -> String {
        let words = collect_words(source);
        let word_count = words.len();
        let out = join(words, self.word_transform, self.skip, &self.delimiter);
        tracing::trace!(case = %self.case, words = word_count, "converted identifier");
        out
    }

    /// Convert many identifiers, preserving order
    pub fn convert_all<S>(&self, sources: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        crate::batch::convert_batch(self, sources)
    }
}
