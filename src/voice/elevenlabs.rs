use super::{SpeechFuture, SpeechSynthesizer};
use crate::api::http_client::build_client_with_timeouts;
use crate::api::scrub::sanitize_api_error;
use crate::config::VoiceConfig;
use crate::error::SpeechError;
use reqwest::Client;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const PROVIDER: &str = "elevenlabs";

#[derive(Debug, Clone, Serialize)]
struct VoiceSettings {
    stability: f64,
    similarity_boost: f64,
    style: f64,
    use_speaker_boost: bool,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

pub struct ElevenLabsSynthesizer {
    base_url: String,
    api_key: String,
    voice_id: String,
    model_id: String,
    settings: VoiceSettings,
    client: Client,
}

impl ElevenLabsSynthesizer {
    pub fn from_config(config: &VoiceConfig) -> Result<Self, SpeechError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| not_configured("missing api key"))?;
        let voice_id = config
            .voice_id
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| not_configured("missing voice id"))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            voice_id,
            model_id: config.model_id.clone(),
            settings: VoiceSettings {
                stability: config.stability,
                similarity_boost: config.similarity_boost,
                style: config.style,
                use_speaker_boost: config.use_speaker_boost,
            },
            client: build_client_with_timeouts(60, 10),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id)
    }
}

fn not_configured(reason: &str) -> SpeechError {
    SpeechError::NotConfigured {
        provider: PROVIDER.to_string(),
        reason: reason.to_string(),
    }
}

fn synthesis_error(message: impl Into<String>) -> SpeechError {
    SpeechError::Synthesis {
        provider: PROVIDER.to_string(),
        message: message.into(),
    }
}

impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn synthesize<'a>(&'a self, text: &'a str) -> SpeechFuture<'a> {
        Box::pin(async move {
            let request = SpeechRequest {
                text,
                model_id: &self.model_id,
                voice_settings: &self.settings,
            };

            let response = self
                .client
                .post(self.url())
                .header("xi-api-key", &self.api_key)
                .header("accept", "audio/mpeg")
                .json(&request)
                .send()
                .await
                .map_err(|e| synthesis_error(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(synthesis_error(format!(
                    "{status}: {}",
                    sanitize_api_error(&body)
                )));
            }

            let audio = response
                .bytes()
                .await
                .map_err(|e| synthesis_error(e.to_string()))?;
            Ok(audio.to_vec())
        })
    }
}
