//! `labelsync rename` — rename labels, preserving color and description.

use anyhow::Result;
use clap::Args;

use labelsync_core::resolver;
use labelsync_engine::Planner;

use crate::{commands, input, GlobalOpts};

/// Arguments for `labelsync rename`. A taken target name is reported as a
/// skip, never overwritten.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Target repositories (owner/name).
    #[arg(required = true, value_name = "OWNER/NAME")]
    pub repositories: Vec<String>,

    /// Rename literal; repeatable.
    #[arg(long = "rename", value_name = "OLD=NEW", required = true)]
    pub renames: Vec<String>,
}

impl RenameArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let renames = self
            .renames
            .iter()
            .map(|spec| input::parse_rename(spec))
            .collect::<Result<Vec<_>>>()?;
        let repos = resolver::parse_repos(&self.repositories)?;

        let client = commands::client_for(opts);
        let plan = Planner::new(&client).plan_rename(&repos, &renames)?;
        commands::review_and_execute(&client, &plan, opts)
    }
}
