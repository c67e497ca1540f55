//! Error types for labelsync-engine.

use thiserror::Error;

use labelsync_core::{ClientError, InvalidInput, RepoId};

/// All errors that can arise while computing a plan.
///
/// Execution never returns an error — per-record failures land in the
/// returned `ChangeResult`s instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Could not read a repository's current labels. Planning needs the
    /// observed state, so this aborts the plan call.
    #[error("failed to list labels for {repo}: {source}")]
    Fetch {
        repo: RepoId,
        #[source]
        source: ClientError,
    },

    /// A requested label or color was malformed.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}
