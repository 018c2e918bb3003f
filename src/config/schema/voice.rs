use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoiceProvider {
    /// ElevenLabs text-to-speech, with the backend proxy as fallback
    #[default]
    Elevenlabs,
    /// The storefront backend's `/voice/speak` proxy only
    Backend,
    /// Voice output disabled
    None,
}

impl fmt::Display for VoiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elevenlabs => f.write_str("elevenlabs"),
            Self::Backend => f.write_str("backend"),
            Self::None => f.write_str("none"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    #[serde(default)]
    pub provider: VoiceProvider,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_stability")]
    pub stability: f64,
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f64,
    #[serde(default)]
    pub style: f64,
    #[serde(default = "default_true")]
    pub use_speaker_boost: bool,
    /// Where synthesized replies are written. Defaults to `<workspace>/audio`.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".into()
}

fn default_stability() -> f64 {
    0.5
}

fn default_similarity_boost() -> f64 {
    0.75
}

fn default_true() -> bool {
    true
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::default(),
            api_key: None,
            voice_id: None,
            model_id: default_model_id(),
            stability: default_stability(),
            similarity_boost: default_similarity_boost(),
            style: 0.0,
            use_speaker_boost: true,
            output_dir: None,
        }
    }
}

impl VoiceConfig {
    /// Names of settings outside the `[0, 1]` range ElevenLabs accepts.
    pub fn out_of_range_settings(&self) -> Vec<&'static str> {
        [
            ("stability", self.stability),
            ("similarity_boost", self.similarity_boost),
            ("style", self.style),
        ]
        .into_iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(name, _)| name)
        .collect()
    }
}
