//! Configuration types for the engine
//!
//! Configuration is plain data loaded from TOML:
//!
//! ```toml
//! [classifier]
//! extra_word_chars = ["'", "_"]
//!
//! [context]
//! max_context_chars = 64
//! trim_order = "alternate"
//! ```

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wordedge_core::{AlphanumericClassifier, ExtendedClassifier, WordClassifier};

/// Default number of characters taken on each side of a target before trimming
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 64;

/// Word character policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Characters treated as word characters in addition to alphanumerics
    pub extra_word_chars: Vec<char>,
}

/// Which context side loses a word first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrimOrder {
    /// Take turns between prefix and suffix
    #[default]
    Alternate,
    /// Trim the prefix as far as possible, then the suffix
    PrefixFirst,
    /// Trim the suffix as far as possible, then the prefix
    SuffixFirst,
}

/// Context trimming settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Characters taken on each side of the target before trimming
    pub max_context_chars: usize,
    /// Side ordering while trimming
    pub trim_order: TrimOrder,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            trim_order: TrimOrder::default(),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Word character policy
    pub classifier: ClassifierConfig,
    /// Context trimming settings
    pub context: ContextConfig,
}

impl EngineConfig {
    /// Create a builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::ConfigError(format!("Failed to serialize config: {e}")))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.context.max_context_chars == 0 {
            return Err(EngineError::ConfigError(
                "context.max_context_chars must be greater than zero".to_string(),
            ));
        }
        if let Some(ch) = self
            .classifier
            .extra_word_chars
            .iter()
            .find(|ch| ch.is_alphanumeric())
        {
            log::warn!("extra word character {ch:?} is already alphanumeric");
        }
        Ok(())
    }

    /// Build the classifier this configuration describes
    pub fn classifier(&self) -> Box<dyn WordClassifier> {
        if self.classifier.extra_word_chars.is_empty() {
            Box::new(AlphanumericClassifier)
        } else {
            Box::new(ExtendedClassifier::new(
                self.classifier.extra_word_chars.iter().copied(),
            ))
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Add an extra word character
    pub fn extra_word_char(mut self, ch: char) -> Self {
        self.config.classifier.extra_word_chars.push(ch);
        self
    }

    /// Replace the extra word characters
    pub fn extra_word_chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.config.classifier.extra_word_chars = chars.into_iter().collect();
        self
    }

    /// Set the initial context size on each side of a target
    pub fn max_context_chars(mut self, chars: usize) -> Self {
        self.config.context.max_context_chars = chars;
        self
    }

    /// Set the trimming side order
    pub fn trim_order(mut self, order: TrimOrder) -> Self {
        self.config.context.trim_order = order;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
