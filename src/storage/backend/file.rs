use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, error};

use super::HistoryBackend;
use crate::errors::{LinkshelfError, Result};

pub struct FileBackend {
    file_path: PathBuf,
}

impl FileBackend {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl HistoryBackend for FileBackend {
    async fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), self.file_path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("History file not found: {}", self.file_path.display());
                Ok(None)
            }
            Err(e) => {
                error!("Failed to read history file {}: {}", self.file_path.display(), e);
                Err(LinkshelfError::persistence_unavailable(format!(
                    "Failed to read {}: {}",
                    self.file_path.display(),
                    e
                )))
            }
        }
    }

    async fn write(&self, data: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.file_path, data).map_err(|e| {
            LinkshelfError::persistence_unavailable(format!(
                "Failed to write {}: {}",
                self.file_path.display(),
                e
            ))
        })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
