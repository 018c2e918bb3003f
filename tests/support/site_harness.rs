#![allow(dead_code)]

use sdherbs::Site;
use sdherbs::config::{Config, VoiceProvider};
use tempfile::TempDir;
use wiremock::MockServer;

/// A site wired to a mock storefront backend with a throwaway workspace.
pub struct SiteHarness {
    pub server: MockServer,
    pub site: Site,
    pub workspace: TempDir,
}

pub fn config_for(server: &MockServer, workspace: &TempDir) -> Config {
    let mut config = Config {
        workspace_dir: workspace.path().join("workspace"),
        config_path: workspace.path().join("config.toml"),
        ..Config::default()
    };
    config.api.base_url = format!("{}/api", server.uri());
    config.voice.provider = VoiceProvider::None;
    config
}

pub async fn site_harness() -> SiteHarness {
    site_harness_with(|_| {}).await
}

pub async fn site_harness_with(tweak: impl FnOnce(&mut Config)) -> SiteHarness {
    let server = MockServer::start().await;
    let workspace = TempDir::new().unwrap();
    let mut config = config_for(&server, &workspace);
    tweak(&mut config);
    let site = Site::new(config).unwrap();
    SiteHarness {
        server,
        site,
        workspace,
    }
}
