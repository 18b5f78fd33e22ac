//! Intent domain model.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user's free-text query.
///
/// This is a closed set: every console input resolves to exactly one of
/// these, with `Unknown` as the guaranteed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Asking about open vulnerabilities (CVE listings).
    VulnerabilitySummary,
    /// Asking about risk score movement over time.
    RiskTrend,
    /// Asking about the overall compliance posture.
    ComplianceScore,
    /// Asking about recent audit-trail activity.
    AuditActivity,
    /// No configured keyword matched.
    Unknown,
}

impl Intent {
    /// Human-readable label for logging and display.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::VulnerabilitySummary => "vulnerability summary",
            Intent::RiskTrend => "risk trend",
            Intent::ComplianceScore => "compliance score",
            Intent::AuditActivity => "audit activity",
            Intent::Unknown => "unknown",
        }
    }
}
