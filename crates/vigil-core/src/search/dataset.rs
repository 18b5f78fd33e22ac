//! The built-in search record set.
//!
//! These records are loaded once at startup and cached for the lifetime of
//! the application; the matcher never mutates them.

use std::sync::OnceLock;

use super::model::{RecordType, SearchRecord};

/// Static storage for the built-in records (initialized once).
static BUILTIN_RECORDS: OnceLock<Vec<SearchRecord>> = OnceLock::new();

/// Returns the built-in read-only record set.
///
/// The records are initialized on first access and cached for subsequent
/// calls.
pub fn builtin_records() -> &'static [SearchRecord] {
    BUILTIN_RECORDS.get_or_init(|| {
        vec![
            SearchRecord::new(
                "ctrl-ac-2",
                RecordType::Control,
                "AC-2 Account Management",
                "NIST 800-53 / Access Control",
            )
            .with_status("Implemented"),
            SearchRecord::new(
                "ctrl-cc6-1",
                RecordType::Control,
                "CC6.1 Logical Access Controls",
                "SOC 2 / Security",
            )
            .with_status("Evidence Review"),
            SearchRecord::new(
                "ctrl-a12-6",
                RecordType::Control,
                "A.12.6 Technical Vulnerability Management",
                "ISO 27001 / Operations Security",
            )
            .with_status("Implemented"),
            SearchRecord::new(
                "risk-vendor-exposure",
                RecordType::Risk,
                "Third-party vendor data exposure",
                "Risk Register / Vendor Management",
            )
            .with_score(18.0),
            SearchRecord::new(
                "risk-unpatched-prod",
                RecordType::Risk,
                "Unpatched production servers",
                "Risk Register / Infrastructure",
            )
            .with_score(15.0),
            SearchRecord::new(
                "CVE-2024-1234",
                RecordType::Vulnerability,
                "CVE-2024-1234",
                "Remote code execution in TLS termination layer",
            )
            .with_severity("Critical"),
            SearchRecord::new(
                "CVE-2024-5555",
                RecordType::Vulnerability,
                "CVE-2024-5555",
                "Privilege escalation in container runtime",
            )
            .with_severity("High"),
            SearchRecord::new(
                "person-dwhitfield",
                RecordType::Person,
                "Dana Whitfield",
                "Compliance Lead",
            ),
            SearchRecord::new(
                "person-mokafor",
                RecordType::Person,
                "Maya Okafor",
                "Security Operations",
            ),
            SearchRecord::new(
                "report-q3-soc2",
                RecordType::Report,
                "Q3 SOC 2 Readiness Report",
                "Reports / Audit",
            )
            .with_status("Draft"),
            SearchRecord::new(
                "report-risk-register",
                RecordType::Report,
                "Q3 Risk Register Export",
                "Reports / Risk",
            )
            .with_status("Published"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_records_initialized() {
        let records = builtin_records();
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.id == "CVE-2024-1234"));
        assert!(records.iter().any(|r| r.record_type == RecordType::Person));
    }

    #[test]
    fn test_builtin_record_ids_unique() {
        let records = builtin_records();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
