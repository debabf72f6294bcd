use std::sync::Arc;

use tracing::info;

use crate::config::StaticConfig;
use crate::errors::{LinkshelfError, Result};

pub mod backend;
pub mod history_store;
pub mod models;

pub use backend::{FileBackend, HistoryBackend, MemoryBackend};
pub use history_store::HistoryStore;
pub use models::{Entry, HISTORY_CAPACITY, History};

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StaticConfig) -> Result<Arc<dyn HistoryBackend>> {
        let backend: Arc<dyn HistoryBackend> = match config.storage.backend.as_str() {
            "file" => Arc::new(FileBackend::new(&config.storage.history_file)),
            "memory" => Arc::new(MemoryBackend::new()),
            other => {
                return Err(LinkshelfError::config(format!(
                    "Unknown storage backend: '{}'. Valid: file, memory",
                    other
                )));
            }
        };

        info!("Using storage backend: {}", backend.name());
        Ok(backend)
    }
}
