//! Durable storage for the serialized history
//!
//! A backend holds exactly one value: the JSON array of entries.

mod file;
mod memory;

use async_trait::async_trait;

use crate::errors::Result;

pub use file::FileBackend;
pub use memory::MemoryBackend;

#[async_trait]
pub trait HistoryBackend: Send + Sync {
    /// `Ok(None)` when nothing has been persisted yet.
    async fn read(&self) -> Result<Option<String>>;
    async fn write(&self, data: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}
