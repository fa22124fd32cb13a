//! Backend resource usage panel.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::remote::{ResourceFootprint, RitualClient};

/// How often a live panel re-reads the footprint.
pub const FOOTPRINT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub struct FootprintPanel {
    client: RitualClient,
    latest: Option<ResourceFootprint>,
    updated_at: Option<DateTime<Local>>,
}

impl FootprintPanel {
    pub fn new(client: RitualClient) -> Self {
        Self {
            client,
            latest: None,
            updated_at: None,
        }
    }

    /// Re-read the footprint. A failure is logged and keeps the last reading.
    pub async fn refresh(&mut self) -> bool {
        match self.client.resource_footprint().await {
            Ok(footprint) => {
                self.latest = Some(footprint);
                self.updated_at = Some(Local::now());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Failed to read resource footprint");
                false
            }
        }
    }

    pub fn footprint(&self) -> Option<&ResourceFootprint> {
        self.latest.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    /// e.g. "Memory: 123.46 MB · Tokens: 4200"
    pub fn summary(&self) -> Option<String> {
        self.latest.as_ref().map(|f| {
            format!(
                "Memory: {:.2} MB · Tokens: {}",
                f.memory_mb, f.estimated_tokens
            )
        })
    }
}
