//! Conversion configuration
//!
//! A configuration names the target style and, optionally, the delimiter.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! case = "screaming-delimited"
//! delimiter = "."
//! ```

use crate::case::Case;
use crate::converter::Converter;
use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Conversion configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target case style
    #[serde(default)]
    pub case: Case,
    /// Delimiter overriding the style's own; required for delimited styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading case configuration");

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ApiError::Config(msg) => ApiError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Build a converter for this configuration
    pub fn converter(&self) -> Result<Converter> {
        Converter::from_config(self)
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.delimiter.is_none() && self.case.default_delimiter().is_none() {
            return Err(ApiError::Config(format!(
                "case style '{}' requires a delimiter",
                self.case
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the target case style
    pub fn case(mut self, case: Case) -> Self {
        self.config.case = case;
        self
    }

    /// Set the target case style by name
    pub fn case_name(mut self, name: &str) -> Result<Self> {
        self.config.case = name.parse()?;
        Ok(self)
    }

    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = Some(delimiter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build a converter directly
    pub fn build_converter(self) -> Result<Converter> {
        Converter::from_config(&self.build()?)
    }
}
