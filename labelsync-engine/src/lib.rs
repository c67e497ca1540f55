//! # labelsync-engine
//!
//! The diff-and-reconciliation engine: given desired label state and the
//! observed state of one or more repositories, [`Planner`] computes the
//! minimal change set, and [`execute`] applies it one record at a time,
//! isolating failures per record.
//!
//! `plan` and `execute` are separate calls so a caller can show the plan and
//! ask for confirmation in between.

pub mod error;
pub mod execute;
pub mod plan;

pub use error::EngineError;
pub use execute::execute;
pub use plan::{Planner, Recolor, Rename};
