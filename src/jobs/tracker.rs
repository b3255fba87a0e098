//! Handle minting and status resolution against the provider.
use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppResult;
use crate::jobs::store::JobStore;
use crate::jobs::JobKind;
use crate::provider::client::{JobStatus, ProviderClient};

/// Sole owner of the handle → provider-id mapping.
///
/// Statuses are never cached here; every query goes back to the provider.
#[derive(Clone)]
pub struct JobTracker {
    store: Arc<dyn JobStore>,
}

impl JobTracker {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        JobTracker { store }
    }

    /// Mint a fresh handle for a provider job and record the mapping.
    pub async fn register(&self, provider_id: &str) -> String {
        let handle = Uuid::new_v4().to_string();
        self.store.put(handle.clone(), provider_id.to_string()).await;
        handle
    }

    /// Translate a client-supplied id into the provider id to query.
    ///
    /// Unknown handles are forwarded verbatim; the provider is the only
    /// component that can reject an id.
    pub async fn resolve_provider_id(&self, id: &str) -> String {
        self.store.get(id).await.unwrap_or_else(|| id.to_string())
    }

    /// Resolve one status query against the provider.
    ///
    /// Video ids are provider ids already and pass through unchanged; image
    /// ids go through the handle map first.
    pub async fn resolve_status(
        &self,
        client: &ProviderClient,
        kind: JobKind,
        id: &str,
    ) -> AppResult<JobStatus> {
        let provider_id = match kind {
            JobKind::Video => id.to_string(),
            JobKind::Image => self.resolve_provider_id(id).await,
        };
        client.get_prediction(&provider_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::store::InMemoryJobStore;

    fn tracker() -> JobTracker {
        JobTracker::new(Arc::new(InMemoryJobStore::new()))
    }

    #[tokio::test]
    async fn register_mints_distinct_handles() {
        let tracker = tracker();
        let a = tracker.register("prov-1").await;
        let b = tracker.register("prov-1").await;
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn registered_handle_resolves_to_its_provider_id() {
        let tracker = tracker();
        let handle = tracker.register("prov-42").await;
        assert_ne!(handle, "prov-42");
        assert_eq!(tracker.resolve_provider_id(&handle).await, "prov-42");
    }

    #[tokio::test]
    async fn unknown_id_is_forwarded_verbatim() {
        let tracker = tracker();
        assert_eq!(tracker.resolve_provider_id("never-issued").await, "never-issued");
    }
}
