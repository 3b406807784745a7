// ABOUTME: Chat widget — renders chat messages into styled ratatui Lines.
// ABOUTME: User, assistant, and system messages get distinct prefixes; a typing line shows while thinking.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::{ChatMessage, ChatMessageKind};

/// Placeholder shown under the last message while a reply is pending.
pub const TYPING_INDICATOR: &str = "• • •";

/// Render chat messages into styled Lines, optionally followed by the typing indicator.
pub fn render_chat_lines(messages: &[ChatMessage], thinking: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, msg) in messages.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }

        match msg.kind {
            ChatMessageKind::User => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "❯ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(msg.content.clone()),
                ]));
            }
            ChatMessageKind::Assistant => {
                for (i, text) in msg.content.split('\n').enumerate() {
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(
                                "◉ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(text.to_string()),
                        ]));
                    } else {
                        lines.push(Line::from(Span::raw(format!("  {}", text))));
                    }
                }
            }
            ChatMessageKind::System => {
                let style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC);
                for text in msg.content.split('\n') {
                    lines.push(Line::from(Span::styled(format!("  {}", text), style)));
                }
            }
        }
    }

    if thinking {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("◉ {}", TYPING_INDICATOR),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
        )));
    }

    lines
}
