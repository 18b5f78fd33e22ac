//! Search domain module.
//!
//! This module contains the static record set searched by the command
//! palette, and the matcher that partitions hits into display buckets.
//!
//! # Module Structure
//!
//! - `model`: Record and result-group types
//! - `dataset`: The built-in read-only record set
//! - `matcher`: [`grouped_results`], the substring matcher

mod dataset;
mod matcher;
mod model;

// Re-export public API
pub use dataset::builtin_records;
pub use matcher::grouped_results;
pub use model::{RecordType, ResultGroup, SearchGroup, SearchRecord};
