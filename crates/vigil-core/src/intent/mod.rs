//! Intent classification domain module.
//!
//! This module contains the closed intent set and the keyword rule table
//! that maps free-text console input to an intent.
//!
//! # Module Structure
//!
//! - `model`: The closed [`Intent`] set
//! - `rules`: The ordered rule table and [`classify`]

mod model;
mod rules;

// Re-export public API
pub use model::Intent;
pub use rules::{IntentRule, classify, intent_rules};
