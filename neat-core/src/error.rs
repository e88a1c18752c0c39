//! Core error types

use thiserror::Error;

/// Errors raised while validating a filter configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A configuration field holds a value the filter cannot work with
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = CoreError::invalid("keep_num", "must be >= 0, got -1");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `keep_num`: must be >= 0, got -1"
        );
        assert_eq!(err.field(), "keep_num");
    }
}
