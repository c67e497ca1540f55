//! Domain types for label synchronization.
//!
//! All types serialize via serde + serde_json and round-trip losslessly;
//! the serialized shape is the exchange format for exported label sets and
//! reviewed change sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

// ---------------------------------------------------------------------------
// RepoId
// ---------------------------------------------------------------------------

/// An `owner/name` repository address.
///
/// Opaque to the planner and executor; only the remote client interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parse `owner/name`. Both halves must be non-empty and the spec must
    /// contain exactly one slash.
    pub fn parse(spec: &str) -> Result<Self, InvalidInput> {
        match spec.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => Err(InvalidInput::BadRepo(spec.to_owned())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RepoId {
    type Error = InvalidInput;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RepoId> for String {
    fn from(repo: RepoId) -> Self {
        repo.to_string()
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// An issue label: name, six-hex-digit color, optional description.
///
/// Immutable value record. A rename or recolor produces a new `Label` value;
/// nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Six lowercase hex digits, no leading `#`.
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Label {
    /// Build a validated label. The color is normalised to lowercase.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, InvalidInput> {
        let label = Self {
            name: name.into(),
            color: color.into().to_ascii_lowercase(),
            description,
        };
        label.validate()?;
        Ok(label)
    }

    /// Check the invariants `new` enforces. Useful after deserializing a
    /// label set from a file, where serde alone accepts any string.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.name.trim().is_empty() {
            return Err(InvalidInput::EmptyName);
        }
        if self.color.len() != 6 || !self.color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidInput::BadColor(self.color.clone()));
        }
        Ok(())
    }

    /// A copy of this label carrying a different name.
    pub fn renamed(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            color: self.color.clone(),
            description: self.description.clone(),
        }
    }

    /// A copy of this label carrying a different color.
    pub fn recolored(&self, color: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            color: color.into().to_ascii_lowercase(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.color)
    }
}

// ---------------------------------------------------------------------------
// Change records
// ---------------------------------------------------------------------------

/// What a single change does, with its full payload.
///
/// A record is self-sufficient: applying it needs no further lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ChangeAction {
    /// Create a label that does not yet exist.
    Create { label: Label },
    /// Update an existing label. `previous_name` is set only for renames.
    Update {
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_name: Option<String>,
        label: Label,
    },
    /// Delete the label with this name.
    Delete { name: String },
}

/// One atomic create/update/delete instruction against one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub repository: RepoId,
    #[serde(flatten)]
    pub action: ChangeAction,
}

impl ChangeRecord {
    pub fn create(repository: RepoId, label: Label) -> Self {
        Self {
            repository,
            action: ChangeAction::Create { label },
        }
    }

    pub fn update(repository: RepoId, previous_name: Option<String>, label: Label) -> Self {
        Self {
            repository,
            action: ChangeAction::Update {
                previous_name,
                label,
            },
        }
    }

    pub fn delete(repository: RepoId, name: impl Into<String>) -> Self {
        Self {
            repository,
            action: ChangeAction::Delete { name: name.into() },
        }
    }

    /// The label name this change targets (the new name, for renames).
    pub fn label_name(&self) -> &str {
        match &self.action {
            ChangeAction::Create { label } | ChangeAction::Update { label, .. } => &label.name,
            ChangeAction::Delete { name } => name,
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            ChangeAction::Create { label } => {
                write!(f, "create {label} on {}", self.repository)
            }
            ChangeAction::Update {
                previous_name: Some(old),
                label,
            } => write!(f, "rename '{old}' to {label} on {}", self.repository),
            ChangeAction::Update {
                previous_name: None,
                label,
            } => write!(f, "update {label} on {}", self.repository),
            ChangeAction::Delete { name } => {
                write!(f, "delete '{name}' on {}", self.repository)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Plan — changes plus reportable skips
// ---------------------------------------------------------------------------

/// Why the planner declined to emit a change it was asked for.
///
/// Silent no-ops (adding an existing label, deleting an absent one) are not
/// skips; a skip is a conflict worth showing the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Rename target name is already taken on this repository.
    RenameTargetExists { existing: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::RenameTargetExists { existing } => {
                write!(f, "a label named '{existing}' already exists")
            }
        }
    }
}

/// A requested change the planner skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedChange {
    pub repository: RepoId,
    /// Name of the label the request addressed.
    pub name: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Output of the planner: the change set plus any reportable skips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plan {
    pub changes: Vec<ChangeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skips: Vec<SkippedChange>,
}

impl Plan {
    /// True when there is nothing to apply and nothing to report.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.skips.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Change results
// ---------------------------------------------------------------------------

/// Coarse classification of a failed change, mirroring [`crate::ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    RateLimited,
    Unauthorized,
    Transport,
}

impl From<&crate::error::ClientError> for ErrorKind {
    fn from(err: &crate::error::ClientError) -> Self {
        use crate::error::ClientError;
        match err {
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Conflict(_) => ErrorKind::Conflict,
            ClientError::RateLimited { .. } => ErrorKind::RateLimited,
            ClientError::Unauthorized(_) => ErrorKind::Unauthorized,
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::Invalid(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Outcome of applying one change record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Failed { kind: ErrorKind, message: String },
}

/// One applied (or attempted) change, paired with its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeResult {
    pub record: ChangeRecord,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ChangeResult {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
