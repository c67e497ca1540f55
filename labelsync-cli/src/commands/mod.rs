//! Subcommand implementations.

pub mod add;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod recolor;
pub mod rename;

use anyhow::Result;

use labelsync_core::{LabelClient, Plan};
use labelsync_github::{ClientConfig, GithubClient};

use crate::{output, GlobalOpts};

/// Build the GitHub client from the shared options.
pub(crate) fn client_for(opts: &GlobalOpts) -> GithubClient {
    GithubClient::new(ClientConfig::with_token(opts.resolved_token()))
}

/// The shared tail of every planning command: show the plan, gate on
/// `--execute` and the confirmation prompt, apply, report.
///
/// Fails (non-zero exit) when any applied change failed.
pub(crate) fn review_and_execute(
    client: &dyn LabelClient,
    plan: &Plan,
    opts: &GlobalOpts,
) -> Result<()> {
    output::print_plan(plan);
    if plan.changes.is_empty() {
        return Ok(());
    }

    if !opts.execute {
        println!(
            "\n[dry-run] {} change(s) planned; re-run with --execute to apply.",
            plan.changes.len()
        );
        return Ok(());
    }

    if !opts.yes && !output::confirm(plan.changes.len())? {
        println!("Aborted.");
        return Ok(());
    }

    let results = labelsync_engine::execute(client, &plan.changes);
    let failed = output::print_results(&results);
    if failed > 0 {
        anyhow::bail!("{failed} of {} change(s) failed", results.len());
    }
    Ok(())
}
