// ABOUTME: Dialogue responder — maps a query and the current state to a reply and the next state.
// ABOUTME: Pure: lower-cases the query, consults the rule tables, and picks a canned reply.

use tracing::debug;

use super::{
    replies::{Replies, ResumeLinks},
    rules::{classify, match_region},
    types::{ConversationState, Intent, Region},
};

/// What the responder decided for a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Answered from `Idle` by the intent table.
    Answered(Intent),
    /// The version question got a recognised region.
    ResumeLink(Region),
    /// The version question got something else; ask again.
    Clarify,
}

/// A reply together with the state the conversation moves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub reply: String,
    pub next: ConversationState,
    pub outcome: Outcome,
}

/// Produces canned replies. Holds only reply text; conversation state is passed in.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    replies: Replies,
    resume: ResumeLinks,
}

impl Responder {
    pub fn new(replies: Replies, resume: ResumeLinks) -> Self {
        Self { replies, resume }
    }

    pub fn replies(&self) -> &Replies {
        &self.replies
    }

    /// Reply to `query` given `state`.
    ///
    /// Callers reject blank input before calling; any other input gets a
    /// non-empty reply, falling through to the fallback text.
    pub fn respond(&self, query: &str, state: ConversationState) -> (String, ConversationState) {
        let turn = self.turn(query, state);
        (turn.reply, turn.next)
    }

    /// Like [`respond`](Self::respond) but also reports which rule fired.
    pub fn turn(&self, query: &str, state: ConversationState) -> Turn {
        let lower = query.to_lowercase();

        let turn = match state {
            ConversationState::AwaitingResumeVersion => {
                let region = match_region(&lower);
                let next = state.after_version_reply(region);
                match region {
                    Some(region) => Turn {
                        reply: self.resume.reply_for(region),
                        next,
                        outcome: Outcome::ResumeLink(region),
                    },
                    None => Turn {
                        reply: self.replies.resume_clarify.clone(),
                        next,
                        outcome: Outcome::Clarify,
                    },
                }
            }
            ConversationState::Idle => {
                let intent = classify(&lower);
                Turn {
                    reply: self.replies.for_intent(intent).to_string(),
                    next: state.after(intent),
                    outcome: Outcome::Answered(intent),
                }
            }
        };

        debug!(
            state = state.label(),
            next = turn.next.label(),
            outcome = ?turn.outcome,
            "dialogue turn"
        );
        turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        Responder::default()
    }

    #[test]
    fn unmatched_input_is_stable_fallback() {
        let r = responder();
        let fallback = r.replies().fallback.clone();
        let mut state = ConversationState::Idle;
        for _ in 0..5 {
            let (reply, next) = r.respond("xyzabc", state);
            assert_eq!(reply, fallback);
            assert_eq!(next, ConversationState::Idle);
            state = next;
        }
    }

    #[test]
    fn resume_request_opens_version_question() {
        let (reply, next) = responder().respond("can I get your resume", ConversationState::Idle);
        assert_eq!(next, ConversationState::AwaitingResumeVersion);
        assert_eq!(reply, Replies::default().resume_prompt);
    }

    #[test]
    fn uk_answer_returns_link_and_idles() {
        let (reply, next) =
            responder().respond("uk please", ConversationState::AwaitingResumeVersion);
        assert!(reply.contains("/Manthan_Mittal_Resume_UK.pdf"));
        assert_eq!(next, ConversationState::Idle);
    }

    #[test]
    fn india_answer_returns_link_and_idles() {
        let (reply, next) =
            responder().respond("INDIA", ConversationState::AwaitingResumeVersion);
        assert!(reply.contains("/Manthan_Mittal_Resume_India.pdf"));
        assert_eq!(next, ConversationState::Idle);
    }

    #[test]
    fn unclear_answer_keeps_asking() {
        let r = responder();
        let turn = r.turn("I'm not sure", ConversationState::AwaitingResumeVersion);
        assert_eq!(turn.outcome, Outcome::Clarify);
        assert_eq!(turn.reply, r.replies().resume_clarify);
        assert_eq!(turn.next, ConversationState::AwaitingResumeVersion);
    }

    #[test]
    fn awaiting_state_ignores_intent_table() {
        // "skills" would normally be answered, but the version question takes precedence.
        let turn = responder().turn("skills", ConversationState::AwaitingResumeVersion);
        assert_eq!(turn.outcome, Outcome::Clarify);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let r = responder();
        assert_eq!(
            r.respond("SKILLS?", ConversationState::Idle),
            r.respond("skills?", ConversationState::Idle)
        );
    }

    #[test]
    fn custom_replies_are_used() {
        let replies = Replies {
            contact: "Send a carrier pigeon.".to_string(),
            ..Replies::default()
        };
        let links = ResumeLinks {
            uk: "/cv-uk.pdf".to_string(),
            india: "/cv-in.pdf".to_string(),
        };
        let r = Responder::new(replies, links);
        assert_eq!(
            r.respond("how do I hire you", ConversationState::Idle).0,
            "Send a carrier pigeon."
        );
        assert!(
            r.respond("uk", ConversationState::AwaitingResumeVersion)
                .0
                .contains("/cv-uk.pdf")
        );
    }
}
