//! Column cleaner and builder
//!
//! Every operation follows the same order: validate the configuration, check
//! that every cell is text, then transform the column. A failure at any stage
//! returns an error and no values.

use crate::{
    config::EngineConfig,
    dispatcher::{AdaptiveDispatcher, Dispatched},
    error::{EngineError, Result},
    executor::ExecutionMode,
    input::Column,
};
use neat_core::{parse_integer, strip_alphanumeric, FilterConfig, TextFilter};
use std::sync::Arc;
use std::time::Instant;

/// Cleaned values with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Output<T> {
    /// One value per input cell, in input order
    pub values: Vec<T>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub execution_mode: ExecutionMode,
    /// Number of elements processed
    pub elements: usize,
    /// Threads that took part
    pub threads: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Applies the cleaning operations to whole columns
#[derive(Debug, Clone)]
pub struct Cleaner {
    dispatcher: Arc<AdaptiveDispatcher>,
}

impl Cleaner {
    /// Create a cleaner with the default engine configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a cleaner with a custom engine configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Arc::new(AdaptiveDispatcher::new(config)?),
        })
    }

    /// Start building a cleaner
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    /// Engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    /// Remove digits and/or punctuation from every element
    pub fn to_text(&self, column: &Column, config: &FilterConfig) -> Result<Output<String>> {
        let filter = config.compile()?;
        self.to_text_with(column, &filter)
    }

    /// Same as [`Cleaner::to_text`] with an already compiled filter
    pub fn to_text_with(&self, column: &Column, filter: &TextFilter) -> Result<Output<String>> {
        self.run("to_text", column, |text| filter.apply(text))
    }

    /// Extract an integer from every element
    ///
    /// Elements without digits take `fallback`; with no fallback the call
    /// fails on the first such element.
    pub fn to_integer(&self, column: &Column, fallback: Option<i64>) -> Result<Output<i64>> {
        let texts = column.texts()?;
        let (parsed, metadata) = self.dispatch("to_integer", &texts, parse_integer);

        let values = parsed
            .into_iter()
            .zip(&texts)
            .enumerate()
            .map(|(position, (value, text))| {
                value
                    .or(fallback)
                    .ok_or_else(|| EngineError::UnparseableInteger {
                        position,
                        value: (*text).to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Output { values, metadata })
    }

    /// Remove ASCII letters and digits from every element
    pub fn to_special_chars(&self, column: &Column) -> Result<Output<String>> {
        self.run("to_special_chars", column, strip_alphanumeric)
    }

    fn run<T, F>(&self, operation: &'static str, column: &Column, f: F) -> Result<Output<T>>
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        let texts = column.texts()?;
        let (values, metadata) = self.dispatch(operation, &texts, f);
        Ok(Output { values, metadata })
    }

    fn dispatch<T, F>(
        &self,
        operation: &'static str,
        texts: &[&str],
        f: F,
    ) -> (Vec<T>, ProcessingMetadata)
    where
        T: Send,
        F: Fn(&str) -> T + Send + Sync,
    {
        let start = Instant::now();
        let Dispatched {
            values,
            mode,
            threads,
        } = self.dispatcher.run(texts, f);
        let elapsed = start.elapsed();

        tracing::debug!(
            operation,
            elements = texts.len(),
            mode = ?mode,
            elapsed_us = elapsed.as_micros() as u64,
            "column processed"
        );

        let metadata = ProcessingMetadata {
            execution_mode: mode,
            elements: texts.len(),
            threads,
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        };
        (values, metadata)
    }
}

/// Builder for [`Cleaner`]
#[derive(Debug, Default)]
pub struct CleanerBuilder {
    config: EngineConfig,
}

impl CleanerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold, in elements
    pub fn parallel_threshold(mut self, elements: usize) -> Self {
        self.config.parallel_threshold = elements;
        self
    }

    /// Build the cleaner
    pub fn build(self) -> Result<Cleaner> {
        Cleaner::with_config(self.config)
    }
}
