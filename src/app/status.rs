use sdherbs::config::{Config, VoiceProvider};

pub fn render_status(config: &Config, session_stored: bool) -> String {
    let mut lines = vec![
        "◆ SD Herbs status".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Workspace   {}", config.workspace_dir.display()),
        format!("Config      {}", config.config_path.display()),
        String::new(),
        format!("  API         {}", config.api.base_url),
        format!(
            "   timeouts   {}s (connect {}s)",
            config.api.timeout_secs, config.api.connect_timeout_secs
        ),
        format!(
            "  Admin       login {} → {}",
            config.admin.login_path, config.admin.landing_path
        ),
        format!("   identity   {}", config.admin.identity_endpoint),
        format!(
            "   session    {}",
            if session_stored { "stored token" } else { "none" }
        ),
        format!(
            "  Chatbot     {} (catalog {})",
            config.chatbot.endpoint, config.chatbot.products_endpoint
        ),
        format!("  Voice       {}", config.voice.provider),
    ];

    if config.voice.provider == VoiceProvider::Elevenlabs {
        lines.push(format!(
            "   api key    {}",
            if config.voice.api_key.is_some() { "set" } else { "missing" }
        ));
        lines.push(format!(
            "   voice id   {}",
            config.voice.voice_id.as_deref().unwrap_or("(unset)")
        ));
        lines.push(format!("   model      {}", config.voice.model_id));
    }
    if config.voice.provider != VoiceProvider::None {
        lines.push(format!("   audio dir  {}", config.audio_dir().display()));
    }

    lines.push(format!("  Logging     {}", config.logging.level));
    lines.join("\n")
}
