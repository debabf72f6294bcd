use async_trait::async_trait;
use parking_lot::Mutex;

use super::HistoryBackend;
use crate::errors::{LinkshelfError, Result};

/// In-process backend. Also used as the test fake for storage failures.
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<Option<String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with raw persisted content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            data: Mutex::new(Some(content.into())),
            ..Self::default()
        }
    }

    /// Every read and write fails with `PersistenceUnavailable`.
    pub fn failing() -> Self {
        Self {
            data: Mutex::new(None),
            fail_reads: true,
            fail_writes: true,
        }
    }

    /// Reads succeed, writes fail (e.g. quota exceeded).
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.data.lock().clone()
    }
}

#[async_trait]
impl HistoryBackend for MemoryBackend {
    async fn read(&self) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(LinkshelfError::persistence_unavailable(
                "memory backend configured to fail",
            ));
        }
        Ok(self.data.lock().clone())
    }

    async fn write(&self, data: &str) -> Result<()> {
        if self.fail_writes {
            return Err(LinkshelfError::persistence_unavailable(
                "memory backend configured to fail",
            ));
        }
        *self.data.lock() = Some(data.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
