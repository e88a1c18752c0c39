//! Filter configuration and validation

use crate::error::{CoreError, Result};
use crate::filter::TextFilter;
use crate::keep::KeepSet;
use std::collections::BTreeSet;

/// Raw filter configuration as supplied by a caller or a config file
///
/// `keep_num` is signed so that out-of-range values coming from untyped
/// sources can be represented and rejected by [`FilterConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct FilterConfig {
    /// Remove ASCII digits
    pub remove_digits: bool,
    /// Remove ASCII punctuation
    pub remove_punctuation: bool,
    /// Literal substrings that survive removal
    pub keep: BTreeSet<String>,
    /// Number of leading digits spared from digit removal
    pub keep_num: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            remove_digits: true,
            remove_punctuation: true,
            keep: BTreeSet::new(),
            keep_num: 0,
        }
    }
}

impl FilterConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Check every field without compiling
    pub fn validate(&self) -> Result<()> {
        self.checked_keep_num()?;
        if self.keep.iter().any(String::is_empty) {
            return Err(CoreError::invalid(
                "keep",
                "entries must be non-empty strings",
            ));
        }
        Ok(())
    }

    fn checked_keep_num(&self) -> Result<usize> {
        usize::try_from(self.keep_num).map_err(|_| {
            CoreError::invalid("keep_num", format!("must be >= 0, got {}", self.keep_num))
        })
    }

    /// Validate and turn the configuration into a reusable filter
    pub fn compile(&self) -> Result<TextFilter> {
        let keep_num = self.checked_keep_num()?;
        let keep = KeepSet::new(self.keep.iter().cloned())?;

        Ok(TextFilter::new(
            self.remove_digits,
            self.remove_punctuation,
            keep,
            keep_num,
        ))
    }
}

/// Fluent builder for [`FilterConfig`]
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    /// Toggle digit removal
    pub fn remove_digits(mut self, enabled: bool) -> Self {
        self.config.remove_digits = enabled;
        self
    }

    /// Toggle punctuation removal
    pub fn remove_punctuation(mut self, enabled: bool) -> Self {
        self.config.remove_punctuation = enabled;
        self
    }

    /// Add substrings to protect
    pub fn keep<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.keep.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Set how many leading digits survive
    pub fn keep_num(mut self, count: i64) -> Self {
        self.config.keep_num = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FilterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build a compiled filter directly
    pub fn build_filter(self) -> Result<TextFilter> {
        self.config.compile()
    }
}
