//! `labelsync delete` — remove labels where they exist.

use anyhow::Result;
use clap::Args;

use labelsync_core::resolver;
use labelsync_engine::Planner;

use crate::{commands, GlobalOpts};

/// Arguments for `labelsync delete`. Absent names are silently skipped.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Target repositories (owner/name).
    #[arg(required = true, value_name = "OWNER/NAME")]
    pub repositories: Vec<String>,

    /// Label name to delete; repeatable.
    #[arg(long = "name", value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

impl DeleteArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let repos = resolver::parse_repos(&self.repositories)?;

        let client = commands::client_for(opts);
        let plan = Planner::new(&client).plan_delete(&repos, &self.names)?;
        commands::review_and_execute(&client, &plan, opts)
    }
}
