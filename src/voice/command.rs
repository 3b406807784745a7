// ABOUTME: CommandChannel — speech through external programs (e.g. espeak, say, a whisper wrapper).
// ABOUTME: Speaking cancels any utterance still playing; listening reads one transcript line from stdout.

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use super::channel::UtteranceChannel;

/// Speech capability backed by configured shell commands.
///
/// `speak_command` receives the text as its final argument. `listen_command`
/// should record one utterance and print its transcript on stdout.
pub struct CommandChannel {
    speak_command: Vec<String>,
    listen_command: Vec<String>,
    current: Mutex<Option<Child>>,
}

impl CommandChannel {
    pub fn new(speak_command: Vec<String>, listen_command: Vec<String>) -> Self {
        Self {
            speak_command,
            listen_command,
            current: Mutex::new(None),
        }
    }

    /// Stop the utterance that is still playing, if any. Never blocks;
    /// the runtime reaps the killed process.
    pub fn cancel(&self) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(mut child) = current.take() {
            // Fails only when the process already exited.
            let _ = child.start_kill();
        }
    }
}

#[async_trait]
impl UtteranceChannel for CommandChannel {
    fn speak(&self, text: &str) {
        let Some((program, args)) = self.speak_command.split_first() else {
            return;
        };

        self.cancel();

        let spawned = Command::new(program)
            .args(args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(program = %program, pid = ?child.id(), "speaking");
                if let Ok(mut current) = self.current.lock() {
                    *current = Some(child);
                }
            }
            Err(e) => warn!(program = %program, error = %e, "speech synthesis unavailable"),
        }
    }

    async fn listen(&self) -> Option<String> {
        let (program, args) = self.listen_command.split_first()?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                parse_transcript(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                warn!(program = %program, status = %output.status, "speech capture failed");
                None
            }
            Err(e) => {
                warn!(program = %program, error = %e, "speech capture unavailable");
                None
            }
        }
    }

    fn supports_listen(&self) -> bool {
        !self.listen_command.is_empty()
    }
}

impl Drop for CommandChannel {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// First non-blank line of recognizer output, trimmed.
pub fn parse_transcript(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
