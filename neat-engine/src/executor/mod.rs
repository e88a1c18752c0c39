//! Execution strategies for column processing

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExecutionMode {
    /// Single-threaded, element after element
    Sequential,
    /// Elements spread over a worker pool
    Parallel,
    /// Pick sequential or parallel from the column length
    #[default]
    Adaptive,
}

/// Order-preserving element-wise execution
pub trait Executor: Send + Sync {
    /// Apply `f` to every item, returning results in input order
    fn map<T, F>(&self, items: &[&str], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;

    /// Number of threads doing the work
    fn threads(&self) -> usize {
        1
    }
}

/// Automatically select execution mode based on column length
pub fn auto_select(len: usize, threshold: usize) -> ExecutionMode {
    if len < 2 || len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(0, 0), ExecutionMode::Sequential);
        assert_eq!(auto_select(1, 0), ExecutionMode::Sequential);
        assert_eq!(auto_select(999, 1_000), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(1_000, 1_000), ExecutionMode::Parallel);
    }
}
