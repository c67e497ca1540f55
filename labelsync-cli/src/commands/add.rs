//! `labelsync add` — create labels where they are missing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use labelsync_core::resolver;
use labelsync_engine::Planner;

use crate::{commands, input, GlobalOpts};

/// Arguments for `labelsync add`. Idempotent: repositories that already have
/// a label by the same name are skipped for it.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Target repositories (owner/name).
    #[arg(required = true, value_name = "OWNER/NAME")]
    pub repositories: Vec<String>,

    /// Label literal; repeatable.
    #[arg(long = "label", value_name = "NAME:COLOR[:DESC]")]
    pub labels: Vec<String>,

    /// JSON label file as produced by `labelsync export`.
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

impl AddArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let labels = input::gather_labels(&self.labels, self.from_file.as_deref())?;
        let repos = resolver::parse_repos(&self.repositories)?;

        let client = commands::client_for(opts);
        let plan = Planner::new(&client).plan_add(&repos, &labels)?;
        commands::review_and_execute(&client, &plan, opts)
    }
}
