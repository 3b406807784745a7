// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Typing stays enabled while the assistant is thinking; submissions are debounced by the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::{self, SlashCommand};
use crate::tui::state::TuiState;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User submitted a query.
    Send(String),
    /// User typed a slash command.
    Command(SlashCommand),
    /// Start a one-shot speech capture.
    Listen,
    /// Flip spoken replies on or off.
    ToggleMute,
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => InputResult::Quit,
            KeyCode::Char('l') => InputResult::Listen,
            KeyCode::Char('s') => InputResult::ToggleMute,
            KeyCode::Char('u') => {
                state.clear_input();
                InputResult::None
            }
            _ => InputResult::None,
        };
    }

    match key.code {
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            InputResult::None
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            InputResult::None
        }
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            InputResult::None
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            InputResult::None
        }
        KeyCode::Enter => match state.submit_input() {
            Some(text) => match commands::parse(&text) {
                Some(cmd) => InputResult::Command(cmd),
                None => InputResult::Send(text),
            },
            None => InputResult::None,
        },
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete();
            InputResult::None
        }
        KeyCode::Left => {
            state.cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.cursor_end();
            InputResult::None
        }
        KeyCode::Esc => InputResult::Quit,
        _ => InputResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Activity;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(state: &mut TuiState, s: &str) {
        for c in s.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn enter_sends_typed_query() {
        let mut state = TuiState::new("Folio".to_string());
        type_str(&mut state, "skills?");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            InputResult::Send("skills?".to_string())
        );
        assert!(state.input.is_empty());
    }

    #[test]
    fn enter_on_blank_does_nothing() {
        let mut state = TuiState::new("Folio".to_string());
        type_str(&mut state, "   ");
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), InputResult::None);
    }

    #[test]
    fn slash_input_becomes_command() {
        let mut state = TuiState::new("Folio".to_string());
        type_str(&mut state, "/help");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            InputResult::Command(SlashCommand::Help)
        );
    }

    #[test]
    fn typing_allowed_while_thinking() {
        let mut state = TuiState::new("Folio".to_string());
        state.activity = Activity::Thinking;
        type_str(&mut state, "uk");
        assert_eq!(state.input, "uk");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            InputResult::Send("uk".to_string())
        );
    }

    #[test]
    fn control_shortcuts() {
        let mut state = TuiState::new("Folio".to_string());
        assert_eq!(handle_key(&mut state, ctrl('l')), InputResult::Listen);
        assert_eq!(handle_key(&mut state, ctrl('s')), InputResult::ToggleMute);
        assert_eq!(handle_key(&mut state, ctrl('c')), InputResult::Quit);
        // Control chords never insert text.
        assert!(state.input.is_empty());

        type_str(&mut state, "oops");
        assert_eq!(handle_key(&mut state, ctrl('u')), InputResult::None);
        assert!(state.input.is_empty());
    }

    #[test]
    fn esc_quits() {
        let mut state = TuiState::new("Folio".to_string());
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), InputResult::Quit);
    }

    #[test]
    fn arrows_scroll_the_chat() {
        let mut state = TuiState::new("Folio".to_string());
        handle_key(&mut state, key(KeyCode::PageUp));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll_offset, 11);
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::PageDown));
        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 0);
    }
}
