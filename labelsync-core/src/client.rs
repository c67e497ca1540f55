//! The remote label client interface.

use crate::error::ClientError;
use crate::types::{Label, RepoId};

/// Typed access to one repository's labels on the remote platform.
///
/// This is the only seam through which the planner and executor touch the
/// network; tests substitute an in-memory implementation. Implementations
/// must not retry — rate limiting is reported, not absorbed — and every call
/// must have a timeout, surfacing expiry as [`ClientError::Transport`].
pub trait LabelClient {
    /// All labels currently defined on `repo`.
    fn list(&self, repo: &RepoId) -> Result<Vec<Label>, ClientError>;

    /// Create `label` on `repo`. Fails with [`ClientError::Conflict`] if the
    /// name is taken.
    fn create(&self, repo: &RepoId, label: &Label) -> Result<Label, ClientError>;

    /// Update the label currently named `old_name` to match `label` (which
    /// may carry a different name — that is a rename).
    fn update(&self, repo: &RepoId, old_name: &str, label: &Label) -> Result<Label, ClientError>;

    /// Delete the label named `name` from `repo`.
    fn delete(&self, repo: &RepoId, name: &str) -> Result<(), ClientError>;
}
