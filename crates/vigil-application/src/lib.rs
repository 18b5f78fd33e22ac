//! Application layer for VIGIL.
//!
//! This crate provides the session state machines that sit between the
//! domain layer and a host UI surface: the conversation session (delayed
//! reply scheduling and teardown safety) and the search session (shortcut
//! toggling and synchronous query matching).

pub mod conversation;
pub mod search_session;
pub mod shortcut;

#[cfg(test)]
mod conversation_test;

pub use conversation::{ConversationEvent, ConversationSession, SubmitOutcome};
pub use search_session::SearchSession;
pub use shortcut::{ListenerGuard, ShortcutRegistry};
