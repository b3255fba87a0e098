//! Shared application state handed to every handler.
use crate::jobs::submitter::JobSubmitter;
use crate::jobs::tracker::JobTracker;
use crate::provider::client::ProviderClient;

pub struct AppState {
    pub provider_client: ProviderClient,
    pub submitter: JobSubmitter,
    pub tracker: JobTracker,
}
