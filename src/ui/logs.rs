//! Backend error log viewer with an optimistic "ignore" action.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::optimistic::{
    ApplyHandle, ConfirmationOutcome, OptimisticController, Phase, Rejection,
};
use crate::remote::{LogEntry, RemoteError, RitualClient};

const ERROR_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum LogViewerError {
    #[error("No log entry at {timestamp}")]
    NoSuchEntry { timestamp: String },

    #[error("Log entry at {timestamp} is already ignored")]
    AlreadyIgnored { timestamp: String },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFilter {
    #[default]
    All,
    Active,
    Ignored,
}

impl LogFilter {
    pub const ALL: [LogFilter; 3] = [LogFilter::All, LogFilter::Active, LogFilter::Ignored];

    pub fn matches(&self, ignored: bool) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Active => !ignored,
            LogFilter::Ignored => ignored,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogFilter::All => "all",
            LogFilter::Active => "active",
            LogFilter::Ignored => "ignored",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

/// One log entry as a view draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub entry: LogEntry,
    pub ignored: bool,
    pub in_flight: bool,
}

struct LogSlot {
    entry: LogEntry,
    ignored: OptimisticController<bool>,
}

/// Error log screen.
///
/// Each entry's ignored flag has its own controller keyed by timestamp, all
/// reporting into one error channel.
pub struct LogViewerScreen {
    client: RitualClient,
    slots: Vec<LogSlot>,
    filter: LogFilter,
    errors: broadcast::Sender<Rejection>,
}

impl LogViewerScreen {
    pub fn new(client: RitualClient) -> Self {
        let (errors, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);
        Self {
            client,
            slots: Vec::new(),
            filter: LogFilter::default(),
            errors,
        }
    }

    /// Reload the log. The remote list replaces the local one; entries seen
    /// before keep their controller and take the remote ignored flag.
    pub async fn refresh(&mut self) -> Result<(), LogViewerError> {
        let entries = self.client.error_logs().await?;

        let mut known: HashMap<String, LogSlot> = self
            .slots
            .drain(..)
            .map(|slot| (slot.entry.timestamp.clone(), slot))
            .collect();

        for entry in entries {
            let slot = match known.remove(&entry.timestamp) {
                Some(slot) => {
                    slot.ignored.reset(entry.ignored);
                    LogSlot { entry, ..slot }
                }
                None => LogSlot {
                    ignored: OptimisticController::with_error_channel(
                        format!("log[{}]", entry.timestamp),
                        entry.ignored,
                        self.errors.clone(),
                    ),
                    entry,
                },
            };
            self.slots.push(slot);
        }

        tracing::debug!(
            entries = self.slots.len(),
            active = self.active_count(),
            "Error log refreshed"
        );
        Ok(())
    }

    /// Hide an entry right away and confirm it remotely.
    pub fn ignore(&self, timestamp: &str) -> Result<ApplyHandle, LogViewerError> {
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.entry.timestamp == timestamp)
            .ok_or_else(|| LogViewerError::NoSuchEntry {
                timestamp: timestamp.to_string(),
            })?;
        if slot.ignored.displayed() {
            return Err(LogViewerError::AlreadyIgnored {
                timestamp: timestamp.to_string(),
            });
        }

        let client = self.client.clone();
        let timestamp = timestamp.to_string();
        Ok(slot.ignored.apply(true, move || async move {
            ConfirmationOutcome::from(client.ignore_log(&timestamp).await)
        }))
    }

    pub fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> LogFilter {
        self.filter
    }

    /// Entries matching the current filter, in the order the API returned them.
    pub fn visible(&self) -> Vec<LogRow> {
        self.slots
            .iter()
            .map(|slot| {
                let snapshot = slot.ignored.snapshot();
                LogRow {
                    entry: slot.entry.clone(),
                    ignored: *snapshot.value.displayed(),
                    in_flight: snapshot.value.phase() == Phase::InFlight,
                }
            })
            .filter(|row| self.filter.matches(row.ignored))
            .collect()
    }

    /// Entries not ignored, whatever the filter.
    pub fn active_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.ignored.displayed())
            .count()
    }

    pub fn controller(&self, timestamp: &str) -> Option<&OptimisticController<bool>> {
        self.slots
            .iter()
            .find(|slot| slot.entry.timestamp == timestamp)
            .map(|slot| &slot.ignored)
    }

    pub fn subscribe_errors(&self) -> broadcast::Receiver<Rejection> {
        self.errors.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_ignored_flag() {
        assert!(LogFilter::All.matches(true));
        assert!(LogFilter::Active.matches(false));
        assert!(!LogFilter::Active.matches(true));
        assert!(LogFilter::Ignored.matches(true));
        assert_eq!(LogFilter::from_label("active"), Some(LogFilter::Active));
        assert_eq!(LogFilter::from_label("everything"), None);
    }
}
