// ABOUTME: Status bar widget — assistant name, activity, voice state, and message count.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::Activity;

/// Inputs for the status bar.
pub struct StatusBarParams<'a> {
    pub assistant_name: &'a str,
    pub activity: Activity,
    pub muted: bool,
    pub message_count: usize,
    pub queued: bool,
}

fn activity_color(activity: Activity) -> Color {
    match activity {
        Activity::Idle => Color::Cyan,
        Activity::Listening => Color::Magenta,
        Activity::Thinking => Color::Yellow,
    }
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let voice = if params.muted { "muted" } else { "voice on" };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", params.assistant_name),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} ", params.activity.label().to_uppercase()),
            Style::default().fg(activity_color(params.activity)),
        ),
        Span::styled("| ", dim),
        Span::styled(format!("{} ", voice), Style::default().fg(Color::White)),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} messages ", params.message_count),
            Style::default().fg(Color::White),
        ),
    ];

    if params.queued {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled("queued ", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn shows_activity_and_voice() {
        let line = status_line(&StatusBarParams {
            assistant_name: "Folio",
            activity: Activity::Thinking,
            muted: false,
            message_count: 3,
            queued: false,
        });
        let t = text(&line);
        assert!(t.contains("Folio"));
        assert!(t.contains("THINKING"));
        assert!(t.contains("voice on"));
        assert!(t.contains("3 messages"));
        assert!(!t.contains("queued"));
    }

    #[test]
    fn shows_muted_and_queued() {
        let line = status_line(&StatusBarParams {
            assistant_name: "Folio",
            activity: Activity::Listening,
            muted: true,
            message_count: 1,
            queued: true,
        });
        let t = text(&line);
        assert!(t.contains("LISTENING"));
        assert!(t.contains("muted"));
        assert!(t.contains("queued"));
    }
}
