//! The ordered keyword rule table and the classifier over it.
//!
//! The reply logic is deliberately data-driven: an ordered list of
//! keyword-set/intent pairs rather than a chain of conditionals, so the
//! priority order is an inspectable artifact with its own tests.

use super::model::Intent;

/// A single entry in the ordered rule table.
///
/// An input matches a rule when any of its keywords occurs as a substring
/// of the lowercased input.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// The intent this rule resolves to.
    pub intent: Intent,
    /// Substrings matched case-insensitively against the input.
    pub keywords: &'static [&'static str],
}

/// The rule table, in priority order. The first rule with any keyword hit
/// wins; overlaps between keyword sets are resolved by this order alone.
///
/// The order is a committed contract: an input mentioning both
/// vulnerabilities and risks resolves to `VulnerabilitySummary` because
/// that rule is checked first.
const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::VulnerabilitySummary,
        keywords: &["vulnerability", "vulnerabilities", "cve", "exploit", "patch"],
    },
    IntentRule {
        intent: Intent::RiskTrend,
        keywords: &["risk", "trend", "heatmap"],
    },
    IntentRule {
        intent: Intent::ComplianceScore,
        keywords: &["compliance", "score", "framework", "soc 2", "iso 27001"],
    },
    IntentRule {
        intent: Intent::AuditActivity,
        keywords: &["audit", "log", "activity", "trail"],
    },
];

/// Returns the rule table in priority order.
pub fn intent_rules() -> &'static [IntentRule] {
    INTENT_RULES
}

/// Classifies free-text input against the rule table.
///
/// The whole input is lowercased and checked for substring containment
/// only; there is no tokenization or stemming. Returns [`Intent::Unknown`]
/// when no rule matches. Pure and deterministic: identical input always
/// yields the identical intent.
///
/// Callers guard against empty/whitespace input; this function itself
/// classifies whatever it is given (empty input matches nothing and
/// resolves to `Unknown`).
pub fn classify(input: &str) -> Intent {
    let normalized = input.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}
