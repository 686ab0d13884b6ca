//! Session slot: the single place the bearer token lives.
//!
//! Every view reads the token through [`SessionStore`]; nothing else keeps a
//! copy. [`FileSession`] persists it between runs of the CLI,
//! [`MemorySession`] keeps it for the lifetime of the process.

pub mod file;

use async_lock::RwLock;
use async_trait::async_trait;

use crate::error::SessionError;

pub use file::FileSession;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    async fn get(&self) -> Option<String>;

    /// Replace the stored token.
    async fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Forget the token. Clearing an empty slot is not an error.
    async fn clear(&self) -> Result<(), SessionError>;
}

/// In-process session slot.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn set(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.token.write().await = None;
        Ok(())
    }
}
