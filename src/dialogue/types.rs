// ABOUTME: Core types for the scripted dialogue — conversation state, intents, regions, messages.
// ABOUTME: ConversationState carries the total transition function used by the responder.

use serde::{Deserialize, Serialize};

/// Whether a follow-up question is pending in the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationState {
    /// No follow-up pending; queries are classified by the intent table.
    #[default]
    Idle,
    /// The assistant asked which resume version the user wants.
    AwaitingResumeVersion,
}

impl ConversationState {
    /// Next state after answering an intent from `Idle`.
    ///
    /// Only a resume request opens the version question; everything else
    /// leaves the conversation idle.
    pub fn after(self, intent: Intent) -> ConversationState {
        match intent {
            Intent::Resume => ConversationState::AwaitingResumeVersion,
            Intent::Skills
            | Intent::Projects
            | Intent::Education
            | Intent::Contact
            | Intent::Experience
            | Intent::Greeting
            | Intent::Fallback => ConversationState::Idle,
        }
    }

    /// Next state after a reply to the version question.
    ///
    /// A recognised region closes the question; anything else keeps asking.
    pub fn after_version_reply(self, region: Option<Region>) -> ConversationState {
        match region {
            Some(_) => ConversationState::Idle,
            None => ConversationState::AwaitingResumeVersion,
        }
    }

    /// Short label for the status bar and JSON output.
    pub fn label(self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingResumeVersion => "awaiting-resume-version",
        }
    }
}

/// Category of request inferred from keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Resume,
    Skills,
    Projects,
    Education,
    Contact,
    Experience,
    Greeting,
    /// Nothing in the table matched.
    Fallback,
}

/// Resume version selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    UnitedKingdom,
    India,
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single exchanged message. Never mutated once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}
