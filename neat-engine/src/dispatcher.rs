//! Adaptive execution dispatcher
//!
//! Chooses between the sequential and parallel executors from the column
//! length and the engine configuration.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Results of one dispatched run
#[derive(Debug)]
pub struct Dispatched<T> {
    /// Per-element results in input order
    pub values: Vec<T>,
    /// Mode that actually ran
    pub mode: ExecutionMode,
    /// Threads that took part
    pub threads: usize,
}

/// Adaptive execution dispatcher
#[derive(Debug)]
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: Option<ParallelExecutor>,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a dispatcher; the worker pool is only built when it can be used
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "parallel")]
        let parallel_executor = if config.may_run_parallel() {
            Some(ParallelExecutor::new(config.threads)?)
        } else {
            None
        };

        Ok(Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor,
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve the mode for a column of `len` elements
    pub fn select_mode(&self, len: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive if self.config.threads == Some(1) => {
                ExecutionMode::Sequential
            }
            ExecutionMode::Adaptive => auto_select(len, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }

    /// Run `f` over `items` in the adaptively selected mode
    pub fn run<T, F>(&self, items: &[&str], f: F) -> Dispatched<T>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        let mode = self.select_mode(items.len());
        self.run_with_mode(items, mode, f)
    }

    /// Run `f` over `items` in a specific mode
    pub fn run_with_mode<T, F>(&self, items: &[&str], mode: ExecutionMode, f: F) -> Dispatched<T>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        match mode {
            ExecutionMode::Adaptive => self.run(items, f),
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => match &self.parallel_executor {
                Some(executor) => Self::execute(executor, items, f),
                None => {
                    tracing::debug!("no worker pool configured, running sequentially");
                    Self::execute(&self.sequential_executor, items, f)
                }
            },
            _ => Self::execute(&self.sequential_executor, items, f),
        }
    }

    fn execute<E, T, F>(executor: &E, items: &[&str], f: F) -> Dispatched<T>
    where
        E: Executor,
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        tracing::debug!(
            elements = items.len(),
            mode = ?executor.mode(),
            threads = executor.threads(),
            "dispatching column"
        );

        Dispatched {
            values: executor.map(items, f),
            mode: executor.mode(),
            threads: executor.threads(),
        }
    }
}
