// ABOUTME: Entry point for folio — a terminal chat with a scripted portfolio assistant.
// ABOUTME: Parses CLI args, loads config, sets up logging, and launches the TUI or a one-shot answer.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::app::App;
use folio::config::Config;
use folio::dialogue::Responder;
use folio::session::Conversation;

const LOG_ENV: &str = "FOLIO_LOG";

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Chat with a scripted portfolio assistant")]
struct Cli {
    /// Config file (defaults to ~/.folio/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with spoken replies muted.
    #[arg(long)]
    mute: bool,

    /// Simulated thinking time before each reply, in milliseconds.
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Answer a single query on stdout and exit.
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,

    /// With --once, print the reply and next state as JSON.
    #[arg(long, requires = "once")]
    json: bool,

    /// Log file for the interactive chat (defaults to ~/.folio/folio.log).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "folio=info".into())
}

/// The TUI owns the terminal, so interactive logs go to a file.
fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// One-shot mode keeps stdout clean; logs go to stderr only when asked for.
fn init_stderr_logging() {
    if std::env::var_os(LOG_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn answer_once(config: &Config, query: &str, json: bool) -> anyhow::Result<()> {
    let responder = Responder::new(config.replies.clone(), config.resume.clone());
    let mut conversation = Conversation::new(responder);
    let Some(reply) = conversation.ask(query) else {
        anyhow::bail!("query is empty");
    };

    if json {
        let out = serde_json::json!({
            "reply": reply,
            "state": conversation.state(),
        });
        println!("{}", out);
    } else {
        println!("{}", reply);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(ms) = cli.delay_ms {
        config.assistant.reply_delay_ms = ms;
    }

    if let Some(query) = &cli.once {
        init_stderr_logging();
        return answer_once(&config, query, cli.json);
    }

    let log_path = cli.log_file.clone().unwrap_or_else(Config::log_path);
    init_file_logging(&log_path)?;

    App::new(config, cli.mute).run().await
}
