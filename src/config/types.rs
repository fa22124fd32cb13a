use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ritual: RitualConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the ritual API (e.g., "https://aracy.onrender.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Ritual defaults used before remote state has loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RitualConfig {
    /// Bond to use when none has been linked in this session.
    #[serde(default)]
    pub bond_id: Option<String>,
    /// Number of reflection cards when no endearments are supplied.
    #[serde(default = "default_card_count")]
    pub card_count: usize,
    /// Delivery time shown before the streak loads, as `HH:MM`.
    #[serde(default = "default_delivery_time")]
    pub default_delivery_time: String,
}

fn default_base_url() -> String {
    "https://aracy.onrender.com".to_string()
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_card_count() -> usize {
    19
}

fn default_delivery_time() -> String {
    "06:00".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            bond_id: None,
            card_count: default_card_count(),
            default_delivery_time: default_delivery_time(),
        }
    }
}
