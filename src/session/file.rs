//! File-backed session slot.

use std::path::{Path, PathBuf};

use async_lock::Mutex;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use super::SessionStore;
use crate::error::SessionError;

/// On-disk layout of the session file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub access_token: String,
    pub saved_at: DateTime<Utc>,
}

/// Session slot persisted as a small JSON file.
///
/// A missing, unreadable or corrupt file reads as "no token".
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    /// Serializes writers within this process.
    write_lock: Mutex<()>,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full record, including when the token was saved.
    pub async fn record(&self) -> Option<SessionRecord> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable session file");
                return None;
            }
        };
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) if !record.access_token.is_empty() => Some(record),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt session file");
                None
            }
        }
    }
}

#[async_trait]
impl SessionStore for FileSession {
    async fn get(&self) -> Option<String> {
        self.record().await.map(|r| r.access_token)
    }

    async fn set(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        let record = SessionRecord {
            access_token: token.to_string(),
            saved_at: Utc::now(),
        };
        let body = serde_json::to_vec_pretty(&record)?;

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        // Readers see the old record or the new one, never a partial file.
        let tmp = self.path.with_extension("json.tmp");
        write_private(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "Session token stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `body` to `path`, readable by the owner only on Unix.
async fn write_private(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;
    // `mode` only applies on creation; a leftover temp file keeps its bits.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await?;
    }
    file.write_all(body).await?;
    file.flush().await
}
