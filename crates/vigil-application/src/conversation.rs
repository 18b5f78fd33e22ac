//! Conversation session state machine.
//!
//! A session owns an append-only message list and schedules assistant
//! replies after a configurable delay. The session loops between idle and
//! awaiting-reply; there is no terminal state short of teardown.
//!
//! Overlapping submissions are deliberately permitted: a new submit while a
//! reply is pending appends a second user message and schedules a second
//! reply, with no queue between them. Replies append in callback-fire
//! order, which is not guaranteed to match submission order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

use vigil_core::config::AssistantConfig;
use vigil_core::intent::classify;
use vigil_core::message::{Message, MessageRole};
use vigil_core::reply::synthesize;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Result of submitting input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was appended and a reply was scheduled.
    Accepted,
    /// Empty/whitespace input; nothing was appended, no state changed.
    Ignored,
}

/// State-change notifications for observers.
///
/// Presentation concerns (auto-scroll, the composing indicator) subscribe
/// to these rather than being wired into the classifier or synthesizer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A message was appended to the session.
    MessageAppended { id: u64, role: MessageRole },
    /// The composing indicator turned on or off.
    ComposingChanged { composing: bool },
}

/// An in-memory conversation with the console assistant.
///
/// The message list is owned exclusively by the session and discarded with
/// it; nothing is persisted. All state lives behind `Arc` so scheduled
/// reply callbacks can outlive a borrow of the session without outliving
/// its teardown flag.
pub struct ConversationSession {
    /// Session ID for this instance.
    session_id: String,
    /// Ordered, append-only message history.
    messages: Arc<RwLock<Vec<Message>>>,
    /// Number of replies currently scheduled but not yet appended.
    pending_replies: Arc<AtomicUsize>,
    /// Cleared on teardown; stale reply callbacks check this and bail.
    alive: Arc<AtomicBool>,
    /// Delay between a submit and its reply.
    reply_delay: Duration,
    /// Best-effort event stream; lagging or absent subscribers are fine.
    events: broadcast::Sender<ConversationEvent>,
}

impl ConversationSession {
    /// Creates a new session with empty history.
    pub fn new(config: &AssistantConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            session_id: Uuid::new_v4().to_string(),
            messages: Arc::new(RwLock::new(Vec::new())),
            pending_replies: Arc::new(AtomicUsize::new(0)),
            alive: Arc::new(AtomicBool::new(true)),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            events,
        }
    }

    /// Unique identifier for this session.
    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// Subscribes to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    /// Whether any reply is currently pending.
    pub fn is_composing(&self) -> bool {
        self.pending_replies.load(Ordering::SeqCst) > 0
    }

    /// Returns an ordered snapshot of the message history.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Submits user input.
    ///
    /// Empty or whitespace-only input is a documented no-op: nothing is
    /// appended and no state changes. Otherwise the user message is
    /// appended verbatim and reply generation is scheduled after the
    /// configured delay. Submitting again while a reply is pending is
    /// allowed; each pending input resolves independently.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let user_message = Message::user(trimmed);
        let user_id = user_message.id;
        self.messages.write().await.push(user_message);
        let _ = self.events.send(ConversationEvent::MessageAppended {
            id: user_id,
            role: MessageRole::User,
        });

        if self.pending_replies.fetch_add(1, Ordering::SeqCst) == 0 {
            let _ = self
                .events
                .send(ConversationEvent::ComposingChanged { composing: true });
        }

        tracing::debug!(
            session_id = %self.session_id,
            "scheduling reply in {:?}",
            self.reply_delay
        );

        let input = trimmed.to_string();
        let messages = Arc::clone(&self.messages);
        let pending = Arc::clone(&self.pending_replies);
        let alive = Arc::clone(&self.alive);
        let events = self.events.clone();
        let delay = self.reply_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if !alive.load(Ordering::SeqCst) {
                // The session was torn down while the reply was pending.
                // Discard silently rather than appending to a dead session.
                pending.fetch_sub(1, Ordering::SeqCst);
                tracing::debug!("dropping stale reply after teardown");
                return;
            }

            let intent = classify(&input);
            let reply = synthesize(intent, &input);
            let reply_id = reply.id;
            tracing::debug!(intent = intent.label(), "appending assistant reply");

            {
                let mut guard = messages.write().await;
                // Re-check under the lock so teardown racing the sleep
                // still cannot append.
                if !alive.load(Ordering::SeqCst) {
                    pending.fetch_sub(1, Ordering::SeqCst);
                    return;
                }
                guard.push(reply);
            }

            let _ = events.send(ConversationEvent::MessageAppended {
                id: reply_id,
                role: MessageRole::Assistant,
            });
            if pending.fetch_sub(1, Ordering::SeqCst) == 1 {
                let _ = events.send(ConversationEvent::ComposingChanged { composing: false });
            }
        });

        SubmitOutcome::Accepted
    }

    /// Tears the session down.
    ///
    /// Pending reply callbacks become no-ops: they fire, observe the dead
    /// flag, and discard their reply without appending or panicking.
    pub fn close(&self) {
        self.alive.store(false, Ordering::SeqCst);
        tracing::debug!(session_id = %self.session_id, "conversation session closed");
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
