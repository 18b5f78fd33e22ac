//! Static per-intent response datasets.
//!
//! These are the console's fixed demo datasets. They are process-wide,
//! read-only, and never mutated at runtime, so they are safe to share
//! across all sessions without synchronization.

use crate::message::{ChartPayload, SeriesPoint, TablePayload};

/// Fallback wording for inputs that match no configured intent.
pub const FALLBACK_TEXT: &str = "I'm not sure I understand. Try asking about \
open vulnerabilities, risk trends, your compliance score, or recent audit activity.";

/// Lead-in text for the vulnerability listing reply.
pub const VULNERABILITY_TEXT: &str =
    "Here are the open critical and high findings that need attention:";

/// Lead-in text for the risk trend reply.
pub const RISK_TREND_TEXT: &str = "Aggregate risk score over the last seven days:";

/// Compliance posture summary. Kept in one string so the score reads the
/// same everywhere it is shown.
pub const COMPLIANCE_TEXT: &str = "Your overall compliance score is 92% across active \
frameworks: SOC 2 is at 94%, ISO 27001 at 91%, and GDPR at 89%. Two controls \
are awaiting evidence review.";

/// Lead-in text for the audit activity reply.
pub const AUDIT_TEXT: &str = "Most recent audit-trail entries:";

/// The fixed vulnerability listing: exactly three rows, keyed by CVE id.
pub fn vulnerability_table() -> TablePayload {
    TablePayload {
        columns: vec![
            "ID".to_string(),
            "Title".to_string(),
            "Severity".to_string(),
            "CVSS".to_string(),
            "Status".to_string(),
        ],
        rows: vec![
            vec![
                "CVE-2024-1234".to_string(),
                "Remote code execution in TLS termination layer".to_string(),
                "Critical".to_string(),
                "9.8".to_string(),
                "Open".to_string(),
            ],
            vec![
                "CVE-2023-9876".to_string(),
                "SQL injection in legacy reporting endpoint".to_string(),
                "Critical".to_string(),
                "9.1".to_string(),
                "In Progress".to_string(),
            ],
            vec![
                "CVE-2024-5555".to_string(),
                "Privilege escalation in container runtime".to_string(),
                "High".to_string(),
                "8.8".to_string(),
                "Open".to_string(),
            ],
        ],
    }
}

/// The fixed 7-point weekly risk series, keyed Mon..Sun.
pub fn risk_trend_chart() -> ChartPayload {
    let points = [
        ("Mon", 62.0),
        ("Tue", 64.0),
        ("Wed", 61.0),
        ("Thu", 58.0),
        ("Fri", 65.0),
        ("Sat", 59.0),
        ("Sun", 55.0),
    ];
    ChartPayload {
        series: "Risk score".to_string(),
        points: points
            .iter()
            .map(|(label, value)| SeriesPoint {
                label: (*label).to_string(),
                value: *value,
            })
            .collect(),
    }
}

/// The fixed recent audit-trail listing.
pub fn audit_activity_table() -> TablePayload {
    TablePayload {
        columns: vec![
            "Actor".to_string(),
            "Action".to_string(),
            "Resource".to_string(),
            "When".to_string(),
        ],
        rows: vec![
            vec![
                "d.whitfield".to_string(),
                "approved evidence".to_string(),
                "SOC 2 / CC6.1".to_string(),
                "12 minutes ago".to_string(),
            ],
            vec![
                "m.okafor".to_string(),
                "exported report".to_string(),
                "Q3 Risk Register".to_string(),
                "1 hour ago".to_string(),
            ],
            vec![
                "svc-scanner".to_string(),
                "imported findings".to_string(),
                "Vulnerability feed".to_string(),
                "3 hours ago".to_string(),
            ],
            vec![
                "j.laurent".to_string(),
                "updated control owner".to_string(),
                "NIST 800-53 / AC-2".to_string(),
                "yesterday".to_string(),
            ],
        ],
    }
}

/// Returns the compliance summary text.
pub fn compliance_summary_text() -> &'static str {
    COMPLIANCE_TEXT
}

/// Returns the fallback text for unknown intents.
pub fn fallback_text() -> &'static str {
    FALLBACK_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerability_rows_are_fixed() {
        let table = vulnerability_table();
        let ids: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(ids, vec!["CVE-2024-1234", "CVE-2023-9876", "CVE-2024-5555"]);
        assert!(table.rows.iter().all(|row| row.len() == table.columns.len()));
    }

    #[test]
    fn test_risk_trend_covers_the_week() {
        let chart = risk_trend_chart();
        let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_compliance_text_carries_the_score() {
        assert!(compliance_summary_text().contains("92%"));
    }
}
