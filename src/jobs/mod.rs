pub mod store;
pub mod submitter;
pub mod tracker;

/// The two request families the gateway serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Image,
    Video,
}
