use thiserror::Error;

/// The one failure callers of [`crate::Client::generate`] ever observe.
///
/// Transport errors, non-success statuses and malformed bodies all end up
/// here. The underlying cause is logged and then dropped.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Failed to generate song")]
pub struct GenerationFailed;
