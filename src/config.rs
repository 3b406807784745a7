// ABOUTME: Configuration loading for folio.
// ABOUTME: Reads ~/.folio/config.toml (or an explicit path); every field has a default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dialogue::{Replies, ResumeLinks};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub voice: VoiceConfig,
    pub resume: ResumeLinks,
    pub replies: Replies,
}

/// How the assistant presents itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub name: String,
    /// Simulated thinking time before a reply appears.
    pub reply_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Manthan's AI Assistant".to_string(),
            reply_delay_ms: 1500,
        }
    }
}

/// Speech commands. Leave a command empty to disable that direction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub enabled: bool,
    pub speak_command: Vec<String>,
    pub listen_command: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speak_command: vec!["espeak".to_string()],
            listen_command: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from ~/.folio/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Directory holding config and logs.
    pub fn folio_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::folio_dir().join("config.toml")
    }

    /// Default log file location.
    pub fn log_path() -> PathBuf {
        Self::folio_dir().join("folio.log")
    }
}
