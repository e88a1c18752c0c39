//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use std::sync::Arc;

/// Multi-threaded executor backed by a dedicated rayon pool
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    thread_pool: Arc<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create an executor with `threads` workers (None = one per core)
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("neat-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        Ok(Self {
            thread_pool: Arc::new(thread_pool),
        })
    }
}

impl Executor for ParallelExecutor {
    fn map<T, F>(&self, items: &[&str], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        // Indexed iterators collect in input order regardless of scheduling
        self.thread_pool
            .install(|| items.par_iter().map(|&item| f(item)).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}
