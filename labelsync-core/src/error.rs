//! Error types for labelsync-core.

use thiserror::Error;

/// A malformed label or repository specification.
///
/// Raised when validating caller-supplied input, before anything reaches the
/// network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Label name was empty or whitespace-only.
    #[error("label name must not be empty")]
    EmptyName,

    /// Color was not exactly six hex digits (no leading `#`).
    #[error("invalid color '{0}': expected six hex digits without a leading '#'")]
    BadColor(String),

    /// Repository was not in `owner/name` form.
    #[error("invalid repository '{0}': expected owner/name")]
    BadRepo(String),
}

/// All errors a [`crate::LabelClient`] implementation may return.
///
/// The set is deliberately small: callers dispatch on the kind, not on
/// platform-specific detail. The client never retries — `RateLimited` is
/// surfaced with its hint and retry policy is the caller's business.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Repository or label does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Name collision (e.g. creating a label that already exists).
    #[error("name conflict: {0}")]
    Conflict(String),

    /// The remote platform throttled the request.
    #[error("rate limited{}", retry_hint(.retry_after))]
    RateLimited {
        /// Seconds to wait before retrying, when the platform said so.
        retry_after: Option<u64>,
    },

    /// Credentials missing, expired, or insufficient.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Network failure, timeout, or an unexpected response.
    #[error("transport error: {0}")]
    Transport(String),

    /// Input rejected before any request was made.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(" (retry after {secs}s)"),
        None => String::new(),
    }
}
