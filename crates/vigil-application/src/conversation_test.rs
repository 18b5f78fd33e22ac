#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast;
    use tokio::time::timeout;

    use vigil_core::config::AssistantConfig;
    use vigil_core::message::{MessageKind, MessagePayload, MessageRole};

    use crate::conversation::{ConversationEvent, ConversationSession, SubmitOutcome};

    fn instant_session() -> ConversationSession {
        ConversationSession::new(&AssistantConfig { reply_delay_ms: 0 })
    }

    /// Blocks until the session appends an assistant message.
    async fn await_assistant_reply(rx: &mut broadcast::Receiver<ConversationEvent>) {
        timeout(Duration::from_secs(2), async {
            loop {
                match rx.recv().await {
                    Ok(ConversationEvent::MessageAppended {
                        role: MessageRole::Assistant,
                        ..
                    }) => break,
                    Ok(_) => continue,
                    Err(err) => panic!("event stream closed: {err}"),
                }
            }
        })
        .await
        .expect("assistant reply did not arrive in time");
    }

    #[tokio::test]
    async fn test_empty_input_is_a_no_op() {
        let session = instant_session();
        assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(session.submit("   \t  ").await, SubmitOutcome::Ignored);
        assert!(session.messages().await.is_empty());
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_vulnerability_question_yields_table_reply() {
        let session = instant_session();
        let mut rx = session.subscribe();

        let outcome = session.submit("Show me critical vulnerabilities").await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
        await_assistant_reply(&mut rx).await;

        let messages = session.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].text, "Show me critical vulnerabilities");
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert_eq!(messages[1].kind, MessageKind::Table);

        let Some(MessagePayload::Table(table)) = &messages[1].payload else {
            panic!("expected a table payload");
        };
        let ids: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(ids, vec!["CVE-2024-1234", "CVE-2023-9876", "CVE-2024-5555"]);
    }

    #[tokio::test]
    async fn test_risk_question_yields_weekly_chart_reply() {
        let session = instant_session();
        let mut rx = session.subscribe();

        session.submit("Analyze risk trends").await;
        await_assistant_reply(&mut rx).await;

        let messages = session.messages().await;
        let reply = &messages[1];
        assert_eq!(reply.kind, MessageKind::Chart);
        let Some(MessagePayload::Chart(chart)) = &reply.payload else {
            panic!("expected a chart payload");
        };
        let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[tokio::test]
    async fn test_compliance_question_yields_score_text() {
        let session = instant_session();
        let mut rx = session.subscribe();

        session.submit("What is my compliance score?").await;
        await_assistant_reply(&mut rx).await;

        let messages = session.messages().await;
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert!(messages[1].text.contains("92%"));
    }

    #[tokio::test]
    async fn test_unmatched_input_yields_fallback_reply() {
        let session = instant_session();
        let mut rx = session.subscribe();

        session.submit("sing me a song").await;
        await_assistant_reply(&mut rx).await;

        let messages = session.messages().await;
        assert_eq!(messages[1].kind, MessageKind::Text);
        assert_eq!(messages[1].text, vigil_core::reply::fallback_text());
    }

    #[tokio::test]
    async fn test_composing_indicator_tracks_pending_reply() {
        let session = ConversationSession::new(&AssistantConfig {
            reply_delay_ms: 200,
        });
        let mut rx = session.subscribe();

        assert!(!session.is_composing());
        session.submit("any new cve?").await;
        assert!(session.is_composing());

        await_assistant_reply(&mut rx).await;
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_concurrent_submissions_both_resolve() {
        let session = instant_session();
        let mut rx = session.subscribe();

        // No queue between overlapping submissions; both user messages
        // append immediately and two replies eventually generate.
        session.submit("show vulnerabilities").await;
        session.submit("what about audit activity").await;

        await_assistant_reply(&mut rx).await;
        await_assistant_reply(&mut rx).await;

        let messages = session.messages().await;
        assert_eq!(messages.len(), 4);
        let user_count = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();
        assert_eq!(user_count, 2);
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_user_messages_append_in_submission_order() {
        let session = instant_session();
        session.submit("first").await;
        session.submit("second").await;

        let messages = session.messages().await;
        let user_texts: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(user_texts, vec!["first", "second"]);
        assert!(messages[0].id < messages[1].id);
    }

    #[tokio::test]
    async fn test_teardown_discards_pending_reply() {
        let session = ConversationSession::new(&AssistantConfig { reply_delay_ms: 50 });

        session.submit("show vulnerabilities").await;
        session.close();

        // Let the scheduled callback fire against the closed session.
        tokio::time::sleep(Duration::from_millis(150)).await;

        let messages = session.messages().await;
        assert_eq!(messages.len(), 1, "stale reply must not append");
        assert_eq!(messages[0].role, MessageRole::User);
        assert!(!session.is_composing());
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let session = instant_session();
        session.close();
        session.close();
        assert!(session.messages().await.is_empty());
    }
}
