//! Shared application state.
//!
//! Documents and issued numbers live in process-local maps; the recipient
//! directory sits behind its trait so the production directory service can
//! replace the in-memory one. Rendered HTML previews are cached with a TTL
//! and invalidated on every write to the underlying document.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::config::RendererConfig;
use crate::document::models::{Document, DocumentKind};
use crate::document::numbering;
use crate::recipient::directory::{InMemoryDirectory, RecipientDirectory};

const PREVIEW_CACHE_TTL: Duration = Duration::from_secs(10 * 60);
const PREVIEW_CACHE_CAPACITY: u64 = 100;

pub struct AppState {
    pub documents: RwLock<HashMap<Uuid, Document>>,
    last_numbers: RwLock<HashMap<DocumentKind, String>>,
    pub recipients: Arc<dyn RecipientDirectory + Send + Sync>,
    pub preview_cache: Cache<Uuid, String>,
    pub renderer_config: RendererConfig,
}

impl AppState {
    pub fn new(renderer_config: RendererConfig) -> Self {
        Self::with_directory(renderer_config, Arc::new(InMemoryDirectory::new()))
    }

    pub fn with_directory(
        renderer_config: RendererConfig,
        recipients: Arc<dyn RecipientDirectory + Send + Sync>,
    ) -> Self {
        let preview_cache = Cache::builder()
            .time_to_live(PREVIEW_CACHE_TTL)
            .max_capacity(PREVIEW_CACHE_CAPACITY)
            .build();

        Self {
            documents: RwLock::new(HashMap::new()),
            last_numbers: RwLock::new(HashMap::new()),
            recipients,
            preview_cache,
            renderer_config,
        }
    }

    /// Issue the next document number for `kind`. The registry lock makes
    /// in-process issuance sequential; the number generator itself only
    /// computes the next candidate string.
    pub fn issue_number(&self, kind: DocumentKind, issue_date: NaiveDate) -> String {
        let mut last_numbers = self.last_numbers.write();
        let next = numbering::next_number(kind, last_numbers.get(&kind).map(String::as_str), issue_date);
        last_numbers.insert(kind, next.clone());
        next
    }
}
