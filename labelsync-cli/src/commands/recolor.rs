//! `labelsync recolor` — change label colors, preserving name and description.

use anyhow::Result;
use clap::Args;

use labelsync_core::resolver;
use labelsync_engine::Planner;

use crate::{commands, input, GlobalOpts};

/// Arguments for `labelsync recolor`. Absent names and already-matching
/// colors are silently skipped.
#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Target repositories (owner/name).
    #[arg(required = true, value_name = "OWNER/NAME")]
    pub repositories: Vec<String>,

    /// Recolor literal; repeatable.
    #[arg(long = "label", value_name = "NAME:COLOR", required = true)]
    pub recolors: Vec<String>,
}

impl RecolorArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let recolors = self
            .recolors
            .iter()
            .map(|spec| input::parse_recolor(spec))
            .collect::<Result<Vec<_>>>()?;
        let repos = resolver::parse_repos(&self.repositories)?;

        let client = commands::client_for(opts);
        let plan = Planner::new(&client).plan_recolor(&repos, &recolors)?;
        commands::review_and_execute(&client, &plan, opts)
    }
}
