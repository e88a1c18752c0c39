//! Character filtering primitives for cleaning columns of text
//!
//! This crate holds the per-string algorithms behind the `neat` tools. Every
//! function here works on a single `&str` and is free of I/O; column-level
//! orchestration lives in `neat-engine`.
//!
//! # Example
//!
//! ```rust
//! use neat_core::FilterConfig;
//!
//! let filter = FilterConfig::builder()
//!     .keep(["o"])
//!     .keep_num(1)
//!     .build_filter()
//!     .unwrap();
//!
//! assert_eq!(filter.apply("Hello, 123!"), "Hello 1");
//! ```

#![warn(missing_docs)]

pub mod class;
pub mod config;
pub mod error;
pub mod filter;
pub mod keep;
pub mod numeric;
pub mod span;
pub mod special;

pub use class::CharClass;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use error::{CoreError, Result};
pub use filter::TextFilter;
pub use keep::KeepSet;
pub use numeric::{parse_integer, strip_non_digits};
pub use span::{Span, SpanSet};
pub use special::strip_alphanumeric;
