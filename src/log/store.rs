use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;

use super::RequestLog;
use crate::models::CapturedRequest;

pub const DEFAULT_LOG_FILE: &str = "requests.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot serialize request log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Owns the request log and the file it is persisted to.
///
/// One lock covers both, so an append (mutate, serialize, write) and a
/// snapshot (read) never interleave. The file on disk is always a complete
/// JSON array of every record up to the last successful write.
pub struct Store {
    path: PathBuf,
    log: Mutex<RequestLog>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Store {
        Self {
            path: path.into(),
            log: Mutex::new(RequestLog::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` and rewrites the whole file. Returns the record's
    /// arrival offset.
    ///
    /// A failed write does not undo the in-memory append; the next
    /// successful append persists it.
    pub async fn append(&self, record: CapturedRequest) -> Result<usize, StoreError> {
        let mut log = self.log.lock().await;
        let offset = log.append(record);

        let data = log.to_json()?;
        tokio::fs::write(&self.path, data).await?;

        Ok(offset)
    }

    /// Raw bytes of the persisted file.
    pub async fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let _log = self.log.lock().await;
        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.log.lock().await.len()
    }
}
