use super::{SpeechFuture, SpeechSynthesizer};
use crate::api::ApiClient;
use crate::error::SpeechError;
use serde::Serialize;

const SPEAK_ENDPOINT: &str = "/voice/speak";

#[derive(Debug, Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
}

/// The storefront backend's own text-to-speech proxy.
#[derive(Debug, Clone)]
pub struct BackendSpeechProxy {
    client: ApiClient,
}

impl BackendSpeechProxy {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl SpeechSynthesizer for BackendSpeechProxy {
    fn name(&self) -> &str {
        "backend"
    }

    fn synthesize<'a>(&'a self, text: &'a str) -> SpeechFuture<'a> {
        Box::pin(async move {
            self.client
                .post_for_bytes(SPEAK_ENDPOINT, &SpeakRequest { text })
                .await
                .map_err(|e| SpeechError::Synthesis {
                    provider: self.name().to_string(),
                    message: e.to_string(),
                })
        })
    }
}
