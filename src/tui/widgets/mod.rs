// ABOUTME: TUI widget sub-modules for chat, status bar, and the resume-version prompt.
// ABOUTME: Each widget is a pure rendering function producing ratatui Lines.

pub mod chat;
pub mod choice;
pub mod status;
