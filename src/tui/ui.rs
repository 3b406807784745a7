// ABOUTME: Main TUI rendering function — assembles header, chat, version prompt, input, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::dialogue::ConversationState;
use crate::tui::state::{Activity, TuiState};
use crate::tui::widgets::chat::render_chat_lines;
use crate::tui::widgets::choice::version_choice_lines;
use crate::tui::widgets::status::{StatusBarParams, status_line};

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();
    let awaiting_version = state.dialogue == ConversationState::AwaitingResumeVersion;

    let constraints = if awaiting_version {
        vec![
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Chat area
            Constraint::Length(2), // Version prompt
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ]
    } else {
        vec![
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Chat area
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(
            " folio",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", state.assistant_name),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Chat area. line_count() matches ratatui's own wrapping, so the scroll
    // bound never hides the newest line.
    let chat_chunk = chunks[1];
    let chat_paragraph =
        Paragraph::new(render_chat_lines(&state.messages, state.is_thinking()))
            .wrap(Wrap { trim: false });
    let total_lines = chat_paragraph.line_count(chat_chunk.width) as u16;
    let max_scroll = total_lines.saturating_sub(chat_chunk.height);

    // scroll_offset counts lines up from the bottom (0 = pinned to bottom).
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }
    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);

    let (input_chunk, status_chunk) = if awaiting_version {
        frame.render_widget(Paragraph::new(version_choice_lines()), chunks[2]);
        (chunks[3], chunks[4])
    } else {
        (chunks[2], chunks[3])
    };

    // Input area
    let mut input_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
    let title = match state.activity {
        Activity::Listening => Some(" listening... "),
        Activity::Thinking if state.queued => Some(" message queued "),
        Activity::Thinking => Some(" thinking... "),
        Activity::Idle => None,
    };
    if let Some(title) = title {
        input_block = input_block.title(Span::styled(title, Style::default().fg(Color::DarkGray)));
    }

    let input = if state.input.is_empty() && state.activity == Activity::Listening {
        Paragraph::new(Span::styled(
            "Listening...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.input.clone())
    };
    frame.render_widget(input.block(input_block), input_chunk);

    if input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();
        let visual_col = UnicodeWidthStr::width(state.input_before_cursor());
        let max_col = input_chunk.width.saturating_sub(1) as usize;
        let cursor_x = input_chunk.x.saturating_add(visual_col.min(max_col) as u16);
        // +1 for the top border.
        let cursor_y = input_chunk.y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }

    // Status bar
    let status = status_line(&StatusBarParams {
        assistant_name: &state.assistant_name,
        activity: state.activity,
        muted: state.muted,
        message_count: state.transcript_len(),
        queued: state.queued,
    });
    frame.render_widget(Paragraph::new(status), status_chunk);
}
