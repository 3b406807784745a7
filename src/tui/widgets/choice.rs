// ABOUTME: Resume-version prompt widget — shown while the assistant awaits a version choice.
// ABOUTME: Lists the accepted answers with a usage hint.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Accepted answers to the version question, as displayed.
pub const VERSION_OPTIONS: &[&str] = &["United Kingdom", "India"];

/// Render the version prompt as two Lines: header with options + usage hint.
pub fn version_choice_lines() -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        "RESUME VERSION: ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, option) in VERSION_OPTIONS.iter().enumerate() {
        if i > 0 {
            header.push(Span::styled(" or ", Style::default().fg(Color::DarkGray)));
        }
        header.push(Span::styled(
            option.to_string(),
            Style::default().fg(Color::White),
        ));
    }

    let hint = Line::from(Span::styled(
        "(Type \"UK\" or \"India\" and press Enter)",
        Style::default().fg(Color::DarkGray),
    ));

    vec![Line::from(header), hint]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_both_versions() {
        let lines = version_choice_lines();
        assert_eq!(lines.len(), 2);
        let header: String = lines[0].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(header.contains("RESUME VERSION:"));
        assert!(header.contains("United Kingdom"));
        assert!(header.contains("India"));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn hint_mentions_enter() {
        let lines = version_choice_lines();
        let hint: String = lines[1].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(hint.contains("Enter"));
    }
}
