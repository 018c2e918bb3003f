//! Voice output for chat replies.

pub mod elevenlabs;
pub mod proxy;
pub mod sanitize;

use crate::api::ApiClient;
use crate::config::{Config, VoiceProvider};
use crate::error::SpeechError;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use tracing::{info, warn};

pub use elevenlabs::ElevenLabsSynthesizer;
pub use proxy::BackendSpeechProxy;
pub use sanitize::speech_text;

pub type SpeechFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, SpeechError>> + Send + 'a>>;

/// Text-to-speech service returning encoded audio (MP3).
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    fn synthesize<'a>(&'a self, text: &'a str) -> SpeechFuture<'a>;
}

/// Synthesizes with a primary service, falls back to a second one, and
/// writes the audio under `output_dir`.
pub struct Speaker {
    primary: Arc<dyn SpeechSynthesizer>,
    fallback: Option<Arc<dyn SpeechSynthesizer>>,
    output_dir: PathBuf,
}

impl Speaker {
    pub fn new(primary: Arc<dyn SpeechSynthesizer>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            primary,
            fallback: None,
            output_dir: output_dir.into(),
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn SpeechSynthesizer>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Speak already-sanitized text. Returns the written audio file.
    pub async fn speak(&self, text: &str) -> Result<PathBuf, SpeechError> {
        let audio = match self.primary.synthesize(text).await {
            Ok(audio) => audio,
            Err(primary_err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(primary_err);
                };
                warn!(
                    "{} failed, falling back to {}: {primary_err}",
                    self.primary.name(),
                    fallback.name()
                );
                fallback.synthesize(text).await?
            }
        };

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self
            .output_dir
            .join(format!("reply-{}.mp3", uuid::Uuid::new_v4().simple()));
        tokio::fs::write(&path, &audio).await?;
        info!(path = %path.display(), bytes = audio.len(), "reply audio written");
        Ok(path)
    }
}

/// Speaker for the configured provider, or `None` when voice is off.
pub fn build_speaker(config: &Config, client: &ApiClient) -> Option<Speaker> {
    let proxy: Arc<dyn SpeechSynthesizer> = Arc::new(BackendSpeechProxy::new(client.clone()));
    let output_dir = config.audio_dir();

    match config.voice.provider {
        VoiceProvider::None => None,
        VoiceProvider::Backend => Some(Speaker::new(proxy, output_dir)),
        VoiceProvider::Elevenlabs => match ElevenLabsSynthesizer::from_config(&config.voice) {
            Ok(eleven) => Some(Speaker::new(Arc::new(eleven), output_dir).with_fallback(proxy)),
            Err(e) => {
                warn!("{e}; using the backend speech proxy");
                Some(Speaker::new(proxy, output_dir))
            }
        },
    }
}
