use crate::config::ApiConfig;
use reqwest::Client;
use std::time::Duration;

/// Client shared by every backend call. The cookie store keeps the admin
/// session cookie the backend sets on login.
pub fn build_client(config: &ApiConfig) -> Client {
    build_client_with_timeouts(config.timeout_secs, config.connect_timeout_secs)
}

pub fn build_client_with_timeouts(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
