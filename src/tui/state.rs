// ABOUTME: TUI state — rendered chat lines, input buffer, scroll, and the assistant indicator.
// ABOUTME: Mirrors the session transcript and interleaves local system notices.

use crate::dialogue::{ConversationState, Message, Role};
use crate::session::Transcript;

/// The kind of a single chat message displayed in the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMessageKind {
    User,
    Assistant,
    /// Local notice (help text, mute toggles); never part of the transcript.
    System,
}

/// A single message in the chat view.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub kind: ChatMessageKind,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(msg: &Message) -> Self {
        let kind = match msg.role {
            Role::User => ChatMessageKind::User,
            Role::Assistant => ChatMessageKind::Assistant,
        };
        Self {
            kind,
            content: msg.text.clone(),
        }
    }
}

/// What the assistant is visibly doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Listening,
    Thinking,
}

impl Activity {
    pub fn label(self) -> &'static str {
        match self {
            Activity::Idle => "idle",
            Activity::Listening => "listening",
            Activity::Thinking => "thinking",
        }
    }
}

/// Full TUI application state.
pub struct TuiState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub cursor_pos: usize,
    pub scroll_offset: u16,
    pub activity: Activity,
    pub muted: bool,
    pub queued: bool,
    pub dialogue: ConversationState,
    pub assistant_name: String,
    /// How many transcript messages have been copied into `messages`.
    mirrored: usize,
}

impl TuiState {
    pub fn new(assistant_name: String) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            activity: Activity::Idle,
            muted: false,
            queued: false,
            dialogue: ConversationState::Idle,
            assistant_name,
            mirrored: 0,
        }
    }

    /// Add a message to the chat view and snap back to the bottom.
    pub fn push_message(&mut self, kind: ChatMessageKind, content: String) {
        self.messages.push(ChatMessage { kind, content });
        self.scroll_offset = 0;
    }

    pub fn push_system(&mut self, content: impl Into<String>) {
        self.push_message(ChatMessageKind::System, content.into());
    }

    /// Copy transcript messages appended since the last call.
    pub fn mirror(&mut self, transcript: &Transcript) {
        let fresh: Vec<ChatMessage> = transcript.messages()[self.mirrored..]
            .iter()
            .map(ChatMessage::from)
            .collect();
        self.mirrored = transcript.len();
        for msg in fresh {
            self.push_message(msg.kind, msg.content);
        }
    }

    /// Number of transcript messages shown so far.
    pub fn transcript_len(&self) -> usize {
        self.mirrored
    }

    pub fn is_thinking(&self) -> bool {
        self.activity == Activity::Thinking
    }

    /// Take the input buffer if it holds anything besides whitespace.
    pub fn submit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;
        Some(trimmed)
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Keep the cursor within the buffer's character range.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.char_len());
    }

    fn byte_at(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map_or(self.input.len(), |(idx, _)| idx)
    }

    pub fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let at = self.byte_at(self.cursor_pos);
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\r') {
            self.insert_char(if c.is_control() { ' ' } else { c });
        }
    }

    pub fn backspace(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }
        let start = self.byte_at(self.cursor_pos - 1);
        let end = self.byte_at(self.cursor_pos);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    pub fn delete(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.char_len() {
            return;
        }
        let start = self.byte_at(self.cursor_pos);
        let end = self.byte_at(self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    pub fn cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// Input text left of the cursor, for cursor placement.
    pub fn input_before_cursor(&self) -> &str {
        &self.input[..self.byte_at(self.cursor_pos.min(self.char_len()))]
    }
}
