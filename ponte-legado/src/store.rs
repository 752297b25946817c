//! In-memory client storage.
//!
//! Records are keyed by their id text. There is no update or delete
//! operation; a re-registered id simply overwrites, and reads observe
//! writes immediately within the process.

use ponte_types::EncryptedClient;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The registry's record store. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct ClientStore {
    inner: Arc<RwLock<HashMap<String, EncryptedClient>>>,
}

impl ClientStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record under its id.
    pub async fn insert(&self, client: EncryptedClient) {
        let key = client.id.to_string();
        self.inner.write().await.insert(key, client);
    }

    /// Fetches a record by id text.
    pub async fn get(&self, id: &str) -> Option<EncryptedClient> {
        self.inner.read().await.get(id).cloned()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
