// ABOUTME: Conversation session — couples the transcript, dialogue state, and responder.
// ABOUTME: Rejects blank input and debounces submissions while a reply is pending.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::dialogue::{ConversationState, Responder};
use crate::session::Transcript;

/// What happened to a submitted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Recorded as a user message; a reply is now pending.
    Accepted,
    /// A reply is pending; this query waits its turn behind it.
    Queued,
    /// Same text as the pending or an already-queued query; dropped.
    Duplicate,
    /// Empty or whitespace only; nothing recorded.
    Blank,
}

/// A single chat session with the scripted assistant.
pub struct Conversation {
    responder: Responder,
    transcript: Transcript,
    state: ConversationState,
    pending: Option<String>,
    queued: VecDeque<String>,
}

impl Conversation {
    /// Start a session whose transcript opens with the greeting reply.
    pub fn new(responder: Responder) -> Self {
        let transcript = Transcript::with_greeting(&responder.replies().greeting);
        Self {
            responder,
            transcript,
            state: ConversationState::Idle,
            pending: None,
            queued: VecDeque::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// The query awaiting a reply, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Queries waiting behind the pending one, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queued.iter().map(String::as_str)
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit a query. The reply is produced later by [`resolve`](Self::resolve).
    pub fn submit(&mut self, text: &str) -> Submission {
        let query = text.trim();
        if query.is_empty() {
            return Submission::Blank;
        }

        if let Some(pending) = &self.pending {
            if pending == query || self.queued.iter().any(|q| q == query) {
                debug!(query, "dropping duplicate submission");
                return Submission::Duplicate;
            }
            self.queued.push_back(query.to_string());
            return Submission::Queued;
        }

        self.transcript.push_user(query);
        self.pending = Some(query.to_string());
        Submission::Accepted
    }

    /// Answer the pending query, appending exactly one assistant message.
    ///
    /// The oldest queued query is promoted to pending afterwards, so
    /// `is_thinking` stays true and the caller should schedule another resolve.
    pub fn resolve(&mut self) -> Option<String> {
        let query = self.pending.take()?;
        let (reply, next) = self.responder.respond(&query, self.state);
        if next != self.state {
            info!(from = self.state.label(), to = next.label(), "conversation state changed");
        }
        self.state = next;
        self.transcript.push_assistant(reply.clone());

        if let Some(queued) = self.queued.pop_front() {
            self.transcript.push_user(queued.as_str());
            self.pending = Some(queued);
        }

        Some(reply)
    }

    /// Submit and answer immediately. Returns `None` for blank input.
    pub fn ask(&mut self, text: &str) -> Option<String> {
        match self.submit(text) {
            Submission::Accepted => self.resolve(),
            Submission::Blank | Submission::Queued | Submission::Duplicate => None,
        }
    }
}
