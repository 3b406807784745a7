// ABOUTME: Transcript store — append-only ordered list of exchanged messages.
// ABOUTME: Lives only for the session; nothing is written to disk.

use crate::dialogue::{Message, Role};

/// Ordered, append-only message history.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript that opens with an assistant greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self::new();
        transcript.push_assistant(greeting);
        transcript
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages written by the given role.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_seeds_one_assistant_message() {
        let t = Transcript::with_greeting("hello there");
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0], Message::assistant("hello there"));
    }

    #[test]
    fn messages_keep_insertion_order() {
        let mut t = Transcript::new();
        assert!(t.is_empty());
        t.push_user("first");
        t.push_assistant("second");
        t.push_user("third");
        let texts: Vec<&str> = t.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(t.last().map(|m| m.role), Some(Role::User));
        assert_eq!(t.count(Role::User), 2);
        assert_eq!(t.count(Role::Assistant), 1);
    }
}
