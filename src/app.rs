// ABOUTME: App orchestrator — wires config, conversation, voice, and TUI into the event loop.
// ABOUTME: Chat holds the loop's state transitions; App owns the terminal and the select! loop.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::commands::{self, SlashCommand};
use crate::config::Config;
use crate::dialogue::Responder;
use crate::session::{Conversation, Submission};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::{Activity, TuiState};
use crate::tui::ui;
use crate::voice::Voice;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Event-loop state: the conversation, the voice, and what the TUI shows.
///
/// Terminal-free so it can be driven directly in tests.
pub struct Chat {
    pub conversation: Conversation,
    pub voice: Voice,
    pub tui: TuiState,
    reply_delay: Duration,
    reply_at: Option<Instant>,
    listening: bool,
    heard_tx: mpsc::Sender<Option<String>>,
}

impl Chat {
    /// Build a chat from config. Captured speech is delivered on the returned receiver.
    pub fn new(config: &Config, voice: Voice) -> (Self, mpsc::Receiver<Option<String>>) {
        let responder = Responder::new(config.replies.clone(), config.resume.clone());
        let (heard_tx, heard_rx) = mpsc::channel(1);
        let mut chat = Self {
            conversation: Conversation::new(responder),
            tui: TuiState::new(config.assistant.name.clone()),
            voice,
            reply_delay: Duration::from_millis(config.assistant.reply_delay_ms),
            reply_at: None,
            listening: false,
            heard_tx,
        };
        chat.sync();
        (chat, heard_rx)
    }

    /// When the pending reply should be shown, if one is pending.
    pub fn reply_at(&self) -> Option<Instant> {
        self.reply_at
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Apply the result of a key press.
    pub fn on_input(&mut self, result: InputResult) -> Flow {
        match result {
            InputResult::None => {}
            InputResult::Send(text) => self.submit(&text),
            InputResult::Command(cmd) => return self.on_command(cmd),
            InputResult::Listen => self.start_listening(),
            InputResult::ToggleMute => self.toggle_mute(),
            InputResult::Quit => return Flow::Quit,
        }
        self.sync();
        Flow::Continue
    }

    fn on_command(&mut self, cmd: SlashCommand) -> Flow {
        match cmd {
            SlashCommand::Help => self.tui.push_system(commands::help_text()),
            SlashCommand::Mute => self.set_muted(true),
            SlashCommand::Unmute => self.set_muted(false),
            SlashCommand::Listen => self.start_listening(),
            SlashCommand::Quit => return Flow::Quit,
            SlashCommand::Unknown(name) => self
                .tui
                .push_system(format!("Unknown command '/{}'. Try /help.", name)),
        }
        self.sync();
        Flow::Continue
    }

    /// Submit a query, typed or heard.
    pub fn submit(&mut self, text: &str) {
        match self.conversation.submit(text) {
            Submission::Accepted => {
                self.reply_at = Some(Instant::now() + self.reply_delay);
            }
            Submission::Queued => debug!("query queued behind pending reply"),
            Submission::Duplicate | Submission::Blank => {}
        }
        self.sync();
    }

    /// The reply delay elapsed: show and speak the reply.
    pub fn on_reply_due(&mut self) {
        self.reply_at = None;
        if let Some(reply) = self.conversation.resolve() {
            self.voice.speak(&reply);
        }
        // The next queued query was promoted; give it its own delay.
        if self.conversation.is_thinking() {
            self.reply_at = Some(Instant::now() + self.reply_delay);
        }
        self.sync();
    }

    /// A listening session finished.
    pub fn on_heard(&mut self, heard: Option<String>) {
        self.listening = false;
        match heard {
            Some(text) => {
                info!(transcript = %text, "speech captured");
                self.submit(&text);
            }
            None => self.tui.push_system("Didn't catch that."),
        }
        self.sync();
    }

    fn start_listening(&mut self) {
        if self.listening {
            return;
        }
        if !self.voice.can_listen() {
            self.tui
                .push_system("Speech capture is unavailable. Set voice.listen_command in config.");
            return;
        }
        self.listening = true;
        let channel = self.voice.channel();
        let tx = self.heard_tx.clone();
        tokio::spawn(async move {
            let heard = channel.listen().await;
            let _ = tx.send(heard).await;
        });
    }

    fn toggle_mute(&mut self) {
        let muted = self.voice.toggle_mute();
        self.announce_mute(muted);
    }

    fn set_muted(&mut self, muted: bool) {
        self.voice.set_muted(muted);
        self.announce_mute(muted);
    }

    fn announce_mute(&mut self, muted: bool) {
        self.tui
            .push_system(if muted { "Voice muted." } else { "Voice on." });
    }

    /// Copy conversation state into the TUI.
    fn sync(&mut self) {
        self.tui.mirror(self.conversation.transcript());
        self.tui.dialogue = self.conversation.state();
        self.tui.muted = self.voice.is_muted();
        self.tui.queued = self.conversation.queued_len() > 0;
        self.tui.activity = if self.listening {
            Activity::Listening
        } else if self.conversation.is_thinking() {
            Activity::Thinking
        } else {
            Activity::Idle
        };
    }
}

/// Top-level application that owns the terminal.
pub struct App {
    config: Config,
    muted: bool,
}

impl App {
    pub fn new(config: Config, muted: bool) -> Self {
        Self { config, muted }
    }

    /// Run the chat until the user quits. The terminal is restored even on error.
    pub async fn run(self) -> anyhow::Result<()> {
        let voice = Voice::from_config(&self.config.voice, self.muted);
        let (mut chat, mut heard_rx) = Chat::new(&self.config, voice);
        let started = Instant::now();
        info!(assistant = %self.config.assistant.name, "chat started");

        let mut terminal = ratatui::try_init()?;
        let result = event_loop(&mut terminal, &mut chat, &mut heard_rx).await;
        ratatui::restore();

        print_exit_screen(&chat, started.elapsed());
        info!(messages = chat.conversation.transcript().len(), "chat ended");
        result
    }
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    chat: &mut Chat,
    heard_rx: &mut mpsc::Receiver<Option<String>>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &mut chat.tui))?;

        let reply_at = chat.reply_at();
        let reply_due = async move {
            match reply_at {
                Some(at) => tokio::time::sleep_until(at.into()).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let result = handle_key(&mut chat.tui, key);
                    if chat.on_input(result) == Flow::Quit {
                        return Ok(());
                    }
                }
                Some(Ok(Event::Paste(text))) => chat.tui.insert_str(&text),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            () = reply_due => chat.on_reply_due(),
            Some(heard) = heard_rx.recv() => chat.on_heard(heard),
        }
    }
}

/// Print a short farewell after the TUI exits.
fn print_exit_screen(chat: &Chat, elapsed: Duration) {
    let secs = elapsed.as_secs();
    let exchanged = chat.conversation.transcript().len();
    println!();
    println!("  \x1b[1mThanks for stopping by!\x1b[0m");
    println!(
        "  {} messages exchanged in {}m {:02}s.",
        exchanged,
        secs / 60,
        secs % 60
    );
    println!();
}
