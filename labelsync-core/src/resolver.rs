//! Input normalization.
//!
//! Callers hand over repositories and labels either as a single literal or as
//! a list; everything downstream of this module works on canonical `Vec`s.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::types::RepoId;

/// A value that deserializes from either a bare literal or an array.
///
/// ```text
/// "octo/tools"              -> One
/// ["octo/tools", "octo/ui"] -> Many
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// Parse a sequence of `owner/name` specs, preserving order.
///
/// Fails on the first malformed spec; a typo'd repository address should stop
/// a run before any plan is computed.
pub fn parse_repos<S: AsRef<str>>(specs: &[S]) -> Result<Vec<RepoId>, InvalidInput> {
    specs.iter().map(|s| RepoId::parse(s.as_ref())).collect()
}
