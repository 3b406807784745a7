// ABOUTME: Session module — the in-memory transcript and the conversation driving the responder.
// ABOUTME: Conversations are never persisted; a session ends when the app exits.

pub mod conversation;
pub mod transcript;

pub use conversation::{Conversation, Submission};
pub use transcript::Transcript;
