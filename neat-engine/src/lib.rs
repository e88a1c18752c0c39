//! Column orchestration for the neat text-cleaning helpers
//!
//! `neat-core` cleans one string at a time. This crate applies those
//! operations to whole columns: it checks element types up front, picks a
//! sequential or parallel executor, and always returns values in input order.
//!
//! ```rust
//! use neat_engine::{Cleaner, Column, FilterConfig};
//!
//! let cleaner = Cleaner::new().unwrap();
//! let column = Column::from(vec!["Hello, 123!", "World456", "Python"]);
//! let config = FilterConfig::builder().keep(["o"]).keep_num(1).build().unwrap();
//!
//! let output = cleaner.to_text(&column, &config).unwrap();
//! assert_eq!(output.values, vec!["Hello 1", "World4", "Python"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use dispatcher::AdaptiveDispatcher;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{Cell, Column};
pub use processor::{Cleaner, CleanerBuilder, Output, ProcessingMetadata};

// Re-export from core for convenience
pub use neat_core::{CoreError, FilterConfig, FilterConfigBuilder, TextFilter};
