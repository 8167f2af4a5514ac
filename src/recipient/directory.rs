//! Recipient directory seam.
//!
//! Documents reference recipients by ID; resolution goes through this trait
//! so the production directory (an external service) can be swapped in
//! without touching the render pipeline. Lookup failures degrade the
//! rendered address block, they never abort a render.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use super::model::Recipient;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("recipient {0} not found")]
    NotFound(Uuid),
    #[error("recipient directory unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    async fn lookup(&self, id: Uuid) -> Result<Recipient, DirectoryError>;
    async fn list(&self) -> Vec<Recipient>;
    async fn insert(&self, recipient: Recipient);
    async fn remove(&self, id: Uuid) -> bool;
}

/// Process-local directory used by default and in tests.
#[derive(Default)]
pub struct InMemoryDirectory {
    entries: RwLock<HashMap<Uuid, Recipient>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipientDirectory for InMemoryDirectory {
    async fn lookup(&self, id: Uuid) -> Result<Recipient, DirectoryError> {
        self.entries
            .read()
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    async fn list(&self) -> Vec<Recipient> {
        self.entries.read().values().cloned().collect()
    }

    async fn insert(&self, recipient: Recipient) {
        self.entries.write().insert(recipient.id, recipient);
    }

    async fn remove(&self, id: Uuid) -> bool {
        self.entries.write().remove(&id).is_some()
    }
}
