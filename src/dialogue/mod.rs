// ABOUTME: Scripted dialogue — keyword rule tables, canned replies, and the conversation state machine.
// ABOUTME: Everything here is synchronous and side-effect free.

pub mod replies;
pub mod responder;
pub mod rules;
pub mod types;

pub use replies::*;
pub use responder::*;
pub use rules::*;
pub use types::*;
