// ABOUTME: Slash commands typed into the input line — /help, /mute, /unmute, /listen, /quit.
// ABOUTME: Commands are handled by the app and never reach the dialogue responder.

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Mute,
    Unmute,
    Listen,
    Quit,
    Unknown(String),
}

/// Commands listed by `/help`, with their descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show commands and topics"),
    ("/mute", "Stop speaking replies"),
    ("/unmute", "Speak replies again"),
    ("/listen", "Capture one spoken question"),
    ("/quit", "Leave the chat"),
];

/// Parse a trimmed input line. Returns `None` when it is an ordinary query.
pub fn parse(input: &str) -> Option<SlashCommand> {
    let rest = input.trim().strip_prefix('/')?;
    let name = rest.split_whitespace().next().unwrap_or("").to_lowercase();
    let cmd = match name.as_str() {
        "help" | "?" => SlashCommand::Help,
        "mute" => SlashCommand::Mute,
        "unmute" => SlashCommand::Unmute,
        "listen" | "mic" => SlashCommand::Listen,
        "quit" | "exit" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(name),
    };
    Some(cmd)
}

/// Text shown for `/help`.
pub fn help_text() -> String {
    let mut lines = vec!["Commands:".to_string()];
    for (name, desc) in COMMANDS {
        lines.push(format!("  {:<8} {}", name, desc));
    }
    lines.push(
        "Ask about skills, projects, education, experience, contact, or the resume.".to_string(),
    );
    lines.push("Keys: Enter send, Ctrl+L listen, Ctrl+S mute, Esc quit.".to_string());
    lines.join("\n")
}
