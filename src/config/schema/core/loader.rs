use super::Config;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home.join(".sdherbs"))
    }

    /// Load `config.toml` from `root`, creating the directory and a default
    /// file on first use. Environment overrides are applied before validation.
    pub fn load_or_init_in(root: &Path) -> Result<Self> {
        let config_path = root.join("config.toml");
        let workspace_dir = root.join("workspace");

        if !workspace_dir.exists() {
            fs::create_dir_all(&workspace_dir)
                .context("Failed to create workspace directory")?;
        }

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.workspace_dir = workspace_dir;
            config
        } else {
            let config = Self {
                config_path: config_path.clone(),
                workspace_dir,
                ..Self::default()
            };
            config.save()?;
            debug!(path = %config_path.display(), "wrote default config");
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let base = url::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Validation(format!("api.base_url {:?}: {e}", self.api.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be http(s), got {}",
                base.scheme()
            )));
        }

        for (key, path) in [
            ("admin.login_path", &self.admin.login_path),
            ("admin.landing_path", &self.admin.landing_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{key} must be an absolute route, got {path:?}"
                )));
            }
        }

        let out_of_range = self.voice.out_of_range_settings();
        if !out_of_range.is_empty() {
            return Err(ConfigError::Validation(format!(
                "voice settings must lie in [0, 1]: {}",
                out_of_range.join(", ")
            )));
        }

        Ok(())
    }
}
