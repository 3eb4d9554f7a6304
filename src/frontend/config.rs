//! Front-end configuration
//!
//! Options that change how source text is tokenized. Every key is optional
//! in the TOML form; missing keys fall back to the defaults below.
//!
//! ```toml
//! [lexer]
//! brace_matching = "stack"
//! max_interpolation_depth = 32
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// How `}` inside an interpolated string is paired with an open `{`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BraceMatching {
    /// Last opened, first closed. Nested braces inside an embedded
    /// expression stay part of that expression.
    #[default]
    Stack,
    /// Earliest opened, first closed. Every `}` closes a region.
    /// Kept for compatibility with scripts written against the legacy scanner.
    Fifo,
}

impl std::fmt::Display for BraceMatching {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            BraceMatching::Stack => write!(f, "stack"),
            BraceMatching::Fifo => write!(f, "fifo"),
        }
    }
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Brace pairing policy for interpolated strings
    #[serde(default)]
    pub brace_matching: BraceMatching,

    /// Maximum nesting of interpolated strings inside embedded expressions
    #[serde(default = "default_max_interpolation_depth")]
    pub max_interpolation_depth: usize,
}

fn default_max_interpolation_depth() -> usize {
    32
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            brace_matching: BraceMatching::default(),
            max_interpolation_depth: default_max_interpolation_depth(),
        }
    }
}

impl LexerConfig {
    /// Configuration reproducing the legacy interpolation scanner
    pub fn legacy() -> Self {
        Self {
            brace_matching: BraceMatching::Fifo,
            ..Self::default()
        }
    }
}

/// Whole front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FrontendConfig {
    /// Tokenizer settings
    #[serde(default)]
    pub lexer: LexerConfig,
}

impl FrontendConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FrontendConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded front-end config from {} (brace matching: {})",
            path.display(),
            config.lexer.brace_matching
        );
        Ok(config)
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lexer.max_interpolation_depth == 0 {
            return Err(ConfigError::Invalid(
                "lexer.max_interpolation_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
