//! Reply synthesis domain module.
//!
//! Maps a classified intent to a fully-formed assistant message drawn from
//! the fixed per-intent datasets.
//!
//! # Module Structure
//!
//! - `dataset`: The static per-intent response datasets
//! - `builder`: [`synthesize`], the intent-to-message mapping

mod builder;
mod dataset;

// Re-export public API
pub use builder::synthesize;
pub use dataset::{audit_activity_table, compliance_summary_text, fallback_text, risk_trend_chart, vulnerability_table};
