// ABOUTME: Utterance channel — the speech capability seam (speak + one-shot listen).
// ABOUTME: SilentChannel is the no-op used when no speech support is configured.

use async_trait::async_trait;

/// Best-effort text-to-speech and speech-to-text.
///
/// Neither operation reports failure: an unavailable capability simply does
/// nothing (`speak`) or hears nothing (`listen` returns `None`).
#[async_trait]
pub trait UtteranceChannel: Send + Sync {
    /// Start reading `text` aloud. Returns without waiting for playback.
    fn speak(&self, text: &str);

    /// Capture a single utterance and return its transcript.
    async fn listen(&self) -> Option<String>;

    /// Whether `listen` can ever return something.
    fn supports_listen(&self) -> bool {
        false
    }
}

/// A channel with no audio at all.
pub struct SilentChannel;

#[async_trait]
impl UtteranceChannel for SilentChannel {
    fn speak(&self, _text: &str) {}

    async fn listen(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_channel_hears_nothing() {
        let channel = SilentChannel;
        channel.speak("anything");
        assert!(channel.listen().await.is_none());
        assert!(!channel.supports_listen());
    }
}
