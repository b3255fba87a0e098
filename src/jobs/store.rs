//! Handle-to-provider-id storage behind an injectable interface.
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Mapping from gateway-issued handles to provider job ids.
///
/// Entries are written once at submission and never mutated or deleted
/// afterwards, so implementations only need plain concurrent map semantics.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn put(&self, handle: String, provider_id: String);
    async fn get(&self, handle: &str) -> Option<String>;
}

#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<String, String>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn put(&self, handle: String, provider_id: String) {
        self.jobs.write().await.insert(handle, provider_id);
    }

    async fn get(&self, handle: &str) -> Option<String> {
        self.jobs.read().await.get(handle).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = InMemoryJobStore::new();
        store.put("h1".to_string(), "p1".to_string()).await;
        assert_eq!(store.get("h1").await, Some("p1".to_string()));
        assert_eq!(store.get("h2").await, None);
    }
}
