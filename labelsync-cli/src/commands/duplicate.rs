//! `labelsync duplicate` — copy a label set into destination repositories.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use labelsync_core::{resolver, RepoId};
use labelsync_engine::Planner;

use crate::{commands, input, GlobalOpts};

/// Arguments for `labelsync duplicate`.
///
/// Only gaps are filled: labels a destination already has are never touched,
/// even when their color differs from the source.
#[derive(Args, Debug)]
pub struct DuplicateArgs {
    /// Source repository whose labels are copied (owner/name).
    #[arg(
        long,
        value_name = "OWNER/NAME",
        conflicts_with = "from_file",
        required_unless_present = "from_file"
    )]
    pub from: Option<String>,

    /// JSON label file as produced by `labelsync export`.
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,

    /// Destination repositories (owner/name).
    #[arg(required = true, value_name = "OWNER/NAME")]
    pub destinations: Vec<String>,
}

impl DuplicateArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let destinations = resolver::parse_repos(&self.destinations)?;

        let client = commands::client_for(opts);
        let planner = Planner::new(&client);

        let source = match (&self.from, &self.from_file) {
            (_, Some(path)) => input::load_labels(path)?,
            (Some(spec), None) => {
                let repo = RepoId::parse(spec)?;
                planner
                    .export(&repo)
                    .with_context(|| format!("cannot read source labels from {repo}"))?
            }
            // clap enforces exactly one source.
            (None, None) => unreachable!("clap requires --from or --from-file"),
        };

        let plan = planner.plan_duplicate(&source, &destinations)?;
        commands::review_and_execute(&client, &plan, opts)
    }
}
