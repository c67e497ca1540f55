//! # labelsync-core
//!
//! Domain types and interfaces for label synchronization.
//!
//! Everything in this crate is network-free: the [`client::LabelClient`]
//! trait is the only seam through which I/O ever happens, and it is
//! implemented elsewhere (`labelsync-github` for the real thing, in-memory
//! stand-ins in tests).

pub mod client;
pub mod error;
pub mod resolver;
pub mod types;

pub use client::LabelClient;
pub use error::{ClientError, InvalidInput};
pub use types::{
    ChangeAction, ChangeRecord, ChangeResult, ErrorKind, Label, Outcome, Plan, RepoId,
    SkipReason, SkippedChange,
};
