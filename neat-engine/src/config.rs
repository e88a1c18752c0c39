//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of worker threads for parallel execution (None = one per core)
    pub threads: Option<usize>,
    /// Minimum column length before adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 10_000,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
        }
    }

    /// Configuration that switches to parallel execution early
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 1_000,
        }
    }

    /// Reject settings no executor can honour
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ThreadPool(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a worker pool may ever be needed
    pub(crate) fn may_run_parallel(&self) -> bool {
        match self.execution_mode {
            ExecutionMode::Sequential => false,
            ExecutionMode::Parallel => true,
            ExecutionMode::Adaptive => self.threads != Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let default = EngineConfig::default();
        assert_eq!(default.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(default.parallel_threshold, 10_000);
        assert!(default.may_run_parallel());

        let sequential = EngineConfig::sequential();
        assert_eq!(sequential.threads, Some(1));
        assert!(!sequential.may_run_parallel());

        assert_eq!(EngineConfig::fast().parallel_threshold, 1_000);
    }

    #[test]
    fn test_validate_zero_threads() {
        let config = EngineConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::ThreadPool(_))));
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_single_thread_adaptive_never_parallel() {
        let config = EngineConfig {
            threads: Some(1),
            ..Default::default()
        };
        assert!(!config.may_run_parallel());
    }
}
