use super::super::{ApiConfig, ChatbotConfig, VoiceConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub chatbot: ChatbotConfig,

    #[serde(default)]
    pub voice: VoiceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Directory synthesized speech lands in.
    pub fn audio_dir(&self) -> PathBuf {
        self.voice
            .output_dir
            .clone()
            .unwrap_or_else(|| self.workspace_dir.join("audio"))
    }

    /// File holding the admin bearer token between runs.
    pub fn credentials_path(&self) -> PathBuf {
        self.workspace_dir.join("session.json")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Where unauthenticated admin navigation is redirected
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// First page after a successful login
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
    /// Identity probe endpoint, relative to `api.base_url`
    #[serde(default = "default_identity_endpoint")]
    pub identity_endpoint: String,
}

fn default_login_path() -> String {
    "/admin/login".into()
}

fn default_landing_path() -> String {
    "/admin/dashboard".into()
}

fn default_identity_endpoint() -> String {
    "/admin/me".into()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            landing_path: default_landing_path(),
            identity_endpoint: default_identity_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` level filter: error, warn, info, debug, trace
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.admin.login_path, "/admin/login");
        assert_eq!(config.admin.landing_path, "/admin/dashboard");
        assert_eq!(config.admin.identity_endpoint, "/admin/me");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.chatbot.endpoint, "/chatbot");
    }

    #[test]
    fn audio_dir_falls_back_to_workspace() {
        let config = Config {
            workspace_dir: PathBuf::from("/tmp/ws"),
            ..Config::default()
        };
        assert_eq!(config.audio_dir(), PathBuf::from("/tmp/ws/audio"));
        assert_eq!(config.credentials_path(), PathBuf::from("/tmp/ws/session.json"));
    }

    #[test]
    fn audio_dir_honours_override() {
        let mut config = Config::default();
        config.voice.output_dir = Some(PathBuf::from("/srv/audio"));
        assert_eq!(config.audio_dir(), PathBuf::from("/srv/audio"));
    }
}
