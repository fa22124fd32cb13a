//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use aracy::config::{ApiConfig, Config, ConfigStore};
use aracy::context::RitualContext;
use aracy::remote::RitualClient;
use aracy::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

pub const BOND: &str = "demo-bond-id";

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

pub fn client_for(base_url: &str) -> RitualClient {
    RitualClient::new(&api_config(base_url)).expect("Failed to build client")
}

/// Context with the test bond already linked.
pub fn bonded_context() -> RitualContext {
    RitualContext::with_bond(BOND)
}

/// App wired to `base_url` with the test bond linked.
pub fn make_app(base_url: &str) -> App {
    let mut config = Config::default();
    config.api = api_config(base_url);
    config.ritual.bond_id = Some(BOND.to_string());
    let store = ConfigStore::new(config, PathBuf::from("/tmp/aracy-test.toml"));
    App::new(store).expect("Failed to build app")
}

/// Write `content` to a temporary config file.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
