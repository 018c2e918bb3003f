use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful admin login leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// File-backed store for the admin token between CLI runs.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let credentials = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(credentials))
    }

    /// Token to attach to requests; unreadable files count as logged out.
    pub fn token(&self) -> Option<String> {
        match self.load() {
            Ok(credentials) => credentials.map(|c| c.token),
            Err(e) => {
                tracing::warn!("ignoring stored credentials: {e:#}");
                None
            }
        }
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create credentials directory")?;
        }
        let json = serde_json::to_string_pretty(credentials)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
