// ABOUTME: TUI module — state, key handling, layout rendering, and widgets for the chat screen.
// ABOUTME: Rendering is a pure function of TuiState so it can be tested with TestBackend.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;
