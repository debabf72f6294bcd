use std::sync::Arc;

use tracing::{debug, info, warn};

use super::backend::HistoryBackend;
use super::models::{Entry, HISTORY_CAPACITY, History};
use crate::errors::Result;

/// Sole owner and writer of the persisted history.
///
/// Every mutation is written through to the backend before the call returns.
/// Storage failures never surface: the store logs them and keeps serving the
/// in-memory history for the rest of the session.
pub struct HistoryStore {
    backend: Arc<dyn HistoryBackend>,
    history: History,
    persistent: bool,
}

impl HistoryStore {
    /// Absent or malformed persisted data yields an empty history.
    pub async fn load(backend: Arc<dyn HistoryBackend>) -> Self {
        let (history, persistent) = match backend.read().await {
            Ok(Some(content)) => match decode(&content) {
                Ok(mut history) => {
                    if history.len() > HISTORY_CAPACITY {
                        warn!(
                            "Persisted history holds {} entries, keeping the newest {}",
                            history.len(),
                            HISTORY_CAPACITY
                        );
                        history.truncate(HISTORY_CAPACITY);
                    }
                    (history, true)
                }
                Err(e) => {
                    warn!("Persisted history is malformed, starting empty: {}", e);
                    (History::new(), true)
                }
            },
            Ok(None) => {
                debug!("No persisted history found, starting empty");
                (History::new(), true)
            }
            Err(e) => {
                warn!(
                    "History storage unavailable ({}), continuing in memory only",
                    e
                );
                (History::new(), false)
            }
        };

        info!(
            "Loaded {} history entries from {} backend",
            history.len(),
            backend.name()
        );

        Self {
            backend,
            history,
            persistent,
        }
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn newest(&self) -> Option<&Entry> {
        self.history.first()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// `false` once storage has failed; from then on history lives in memory only.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Prepend, drop whatever falls beyond the cap, persist.
    pub async fn append(&mut self, entry: Entry) -> &[Entry] {
        debug!("Appending history entry {} -> {}", entry.short_url, entry.original_url);
        self.history.insert(0, entry);
        if self.history.len() > HISTORY_CAPACITY {
            for evicted in self.history.drain(HISTORY_CAPACITY..) {
                debug!("Evicted history entry {}", evicted.short_url);
            }
        }
        self.persist().await;
        &self.history
    }

    pub async fn clear(&mut self) {
        info!("Clearing {} history entries", self.history.len());
        self.history.clear();
        self.persist().await;
    }

    pub async fn persist(&mut self) {
        if !self.persistent {
            debug!("Persistence disabled for this session, keeping history in memory");
            return;
        }

        let json = match encode(&self.history) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.write(&json).await {
            warn!(
                "Failed to persist history to {} backend ({}), continuing in memory only",
                self.backend.name(),
                e
            );
            self.persistent = false;
        }
    }
}

fn decode(content: &str) -> Result<History> {
    Ok(serde_json::from_str(content)?)
}

// Compact, so reloading and persisting again is byte-identical.
fn encode(history: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}
