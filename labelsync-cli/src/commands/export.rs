//! `labelsync export` — dump a repository's labels as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use labelsync_core::RepoId;
use labelsync_engine::Planner;

use crate::{commands, GlobalOpts};

/// Arguments for `labelsync export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Repository to export (owner/name).
    #[arg(value_name = "OWNER/NAME")]
    pub repository: String,

    /// Write to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self, opts: &GlobalOpts) -> Result<()> {
        let repo = RepoId::parse(&self.repository)?;
        let client = commands::client_for(opts);
        let labels = Planner::new(&client).export(&repo)?;

        let json = serde_json::to_string_pretty(&labels).context("serialize labels")?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, json)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                println!("Exported {} label(s) from {repo} to {}", labels.len(), path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
