//! Stylize API Gateway library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and shared state used by the binary.
//! - `provider`: Thin client for the generation provider's REST endpoints.
//! - `prompt`: Style catalog, prompt templates, and payload construction.
//! - `jobs`: Job submission, handle tracking, and the job store.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `ProviderClient`,
//! `JobSubmitter`, and `JobTracker`.
pub mod api;
pub mod provider;
pub mod prompt;
pub mod jobs;
pub mod config;
pub mod error;

pub use config::Config;
pub use provider::client::ProviderClient;
pub use jobs::submitter::JobSubmitter;
pub use jobs::tracker::JobTracker;
