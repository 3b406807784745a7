// ABOUTME: Voice module — utterance channels and the mute toggle wrapped around them.
// ABOUTME: The dialogue never touches audio; the app routes replies here after appending them.

pub mod channel;
pub mod command;

use std::sync::Arc;

pub use channel::{SilentChannel, UtteranceChannel};
pub use command::CommandChannel;

use crate::config::VoiceConfig;

/// An utterance channel plus the user's mute switch.
#[derive(Clone)]
pub struct Voice {
    channel: Arc<dyn UtteranceChannel>,
    muted: bool,
}

impl Voice {
    pub fn new(channel: Arc<dyn UtteranceChannel>, muted: bool) -> Self {
        Self { channel, muted }
    }

    /// Build the channel described by config. Disabled voice gets a silent channel.
    pub fn from_config(config: &VoiceConfig, muted: bool) -> Self {
        let channel: Arc<dyn UtteranceChannel> = if config.enabled {
            Arc::new(CommandChannel::new(
                config.speak_command.clone(),
                config.listen_command.clone(),
            ))
        } else {
            Arc::new(SilentChannel)
        };
        Self::new(channel, muted)
    }

    /// Speak unless muted.
    pub fn speak(&self, text: &str) {
        if !self.muted {
            self.channel.speak(text);
        }
    }

    pub fn channel(&self) -> Arc<dyn UtteranceChannel> {
        Arc::clone(&self.channel)
    }

    pub fn can_listen(&self) -> bool {
        self.channel.supports_listen()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute switch and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    #[derive(Default)]
    struct RecordingChannel {
        spoken: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl UtteranceChannel for RecordingChannel {
        fn speak(&self, text: &str) {
            self.spoken.lock().unwrap().push(text.to_string());
        }

        async fn listen(&self) -> Option<String> {
            Some("resume".to_string())
        }

        fn supports_listen(&self) -> bool {
            true
        }
    }

    #[test]
    fn muted_voice_does_not_speak() {
        let recorder = Arc::new(RecordingChannel::default());
        let mut voice = Voice::new(recorder.clone(), false);

        voice.speak("one");
        assert!(voice.toggle_mute());
        voice.speak("two");
        assert!(!voice.toggle_mute());
        voice.speak("three");

        assert_eq!(*recorder.spoken.lock().unwrap(), vec!["one", "three"]);
    }

    #[test]
    fn set_muted_is_idempotent() {
        let mut voice = Voice::new(Arc::new(SilentChannel), false);
        voice.set_muted(false);
        assert!(!voice.is_muted());
        voice.set_muted(true);
        voice.set_muted(true);
        assert!(voice.is_muted());
    }

    #[tokio::test]
    async fn listen_goes_through_the_channel() {
        let voice = Voice::new(Arc::new(RecordingChannel::default()), true);
        assert!(voice.can_listen());
        assert_eq!(voice.channel().listen().await, Some("resume".to_string()));
    }

    #[test]
    fn disabled_config_is_silent() {
        let config = VoiceConfig {
            enabled: false,
            ..VoiceConfig::default()
        };
        let voice = Voice::from_config(&config, false);
        assert!(!voice.can_listen());
    }
}
