//! Intent-to-message synthesis.

use crate::intent::Intent;
use crate::message::Message;

use super::dataset;

/// Builds the assistant reply for a classified intent.
///
/// Pure: no side effects, and the same intent always yields structurally
/// identical payload content. The caller owns appending the result to a
/// session and clearing any composing indicator.
///
/// The original input is accepted alongside the intent for echo/logging by
/// callers; it does not influence content selection.
pub fn synthesize(intent: Intent, _input: &str) -> Message {
    match intent {
        Intent::VulnerabilitySummary => Message::assistant_table(
            dataset::VULNERABILITY_TEXT,
            dataset::vulnerability_table(),
        ),
        Intent::RiskTrend => {
            Message::assistant_chart(dataset::RISK_TREND_TEXT, dataset::risk_trend_chart())
        }
        Intent::ComplianceScore => Message::assistant_text(dataset::compliance_summary_text()),
        Intent::AuditActivity => {
            Message::assistant_table(dataset::AUDIT_TEXT, dataset::audit_activity_table())
        }
        Intent::Unknown => Message::assistant_text(dataset::fallback_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageKind, MessagePayload, MessageRole};

    #[test]
    fn test_replies_are_assistant_messages() {
        for intent in [
            Intent::VulnerabilitySummary,
            Intent::RiskTrend,
            Intent::ComplianceScore,
            Intent::AuditActivity,
            Intent::Unknown,
        ] {
            let msg = synthesize(intent, "anything");
            assert_eq!(msg.role, MessageRole::Assistant);
        }
    }

    #[test]
    fn test_kind_matches_intent() {
        assert_eq!(
            synthesize(Intent::VulnerabilitySummary, "").kind,
            MessageKind::Table
        );
        assert_eq!(synthesize(Intent::RiskTrend, "").kind, MessageKind::Chart);
        assert_eq!(
            synthesize(Intent::ComplianceScore, "").kind,
            MessageKind::Text
        );
        assert_eq!(synthesize(Intent::Unknown, "").kind, MessageKind::Text);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let a = synthesize(Intent::VulnerabilitySummary, "show vulns");
        let b = synthesize(Intent::VulnerabilitySummary, "show vulns");
        assert_eq!(a.payload, b.payload);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_unknown_intent_uses_fallback_text() {
        let msg = synthesize(Intent::Unknown, "gibberish");
        assert_eq!(msg.text, super::dataset::fallback_text());
        assert!(msg.payload.is_none());
    }

    #[test]
    fn test_chart_reply_has_seven_points() {
        let msg = synthesize(Intent::RiskTrend, "");
        let Some(MessagePayload::Chart(chart)) = msg.payload else {
            panic!("expected a chart payload");
        };
        assert_eq!(chart.points.len(), 7);
        assert_eq!(chart.points[0].label, "Mon");
        assert_eq!(chart.points[6].label, "Sun");
    }
}
