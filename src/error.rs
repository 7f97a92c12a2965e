//! Crate-wide error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is surfaced to JavaScript. Component glue logs these and
//! carries on, so a broken storage backend or a stale draft never stops the
//! rest of the page from wiring up.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The browser refused to hand out `localStorage` (private mode, policy).
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage {op} failed for key {key}")]
    Storage { op: &'static str, key: String },
    #[error("draft codec failed: {0}")]
    Draft(#[from] serde_json::Error),
    #[error("invalid config value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}
