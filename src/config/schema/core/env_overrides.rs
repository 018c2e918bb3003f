use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("SDHERBS_API_URL")
            && !base_url.is_empty()
        {
            self.api.base_url = base_url;
        }

        if let Ok(level) = std::env::var("SDHERBS_LOG")
            && !level.is_empty()
        {
            self.logging.level = level;
        }

        if let Ok(key) = std::env::var("SDHERBS_ELEVENLABS_API_KEY")
            .or_else(|_| std::env::var("ELEVENLABS_API_KEY"))
            && !key.is_empty()
        {
            self.voice.api_key = Some(key);
        }

        if let Ok(voice_id) = std::env::var("SDHERBS_ELEVENLABS_VOICE_ID")
            && !voice_id.is_empty()
        {
            self.voice.voice_id = Some(voice_id);
        }
    }
}
