//! Sequential execution strategy

use crate::executor::{ExecutionMode, Executor};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn map<T, F>(&self, items: &[&str], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        items.iter().map(|&item| f(item)).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
