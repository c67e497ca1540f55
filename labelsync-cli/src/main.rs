//! labelsync — synchronize issue labels across GitHub repositories.
//!
//! # Usage
//!
//! ```text
//! labelsync duplicate --from <owner/name> <dest>... [--execute] [--yes]
//! labelsync duplicate --from-file labels.json <dest>...
//! labelsync export <owner/name> [-o labels.json]
//! labelsync add <owner/name>... --label NAME:COLOR[:DESC]... [--from-file labels.json]
//! labelsync delete <owner/name>... --name <name>...
//! labelsync rename <owner/name>... --rename OLD=NEW...
//! labelsync recolor <owner/name>... --label NAME:COLOR...
//! ```
//!
//! Every command computes and prints a plan; nothing touches the remote
//! label set unless `--execute` is given, and `--execute` asks for
//! confirmation unless `--yes` is too.

mod commands;
mod input;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{
    add::AddArgs, delete::DeleteArgs, duplicate::DuplicateArgs, export::ExportArgs,
    recolor::RecolorArgs, rename::RenameArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "labelsync",
    version,
    about = "Synchronize issue labels across GitHub repositories",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// GitHub API token (defaults to $GITHUB_TOKEN).
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Apply the computed changes. Without this flag only the plan is shown.
    #[arg(long, global = true)]
    pub execute: bool,

    /// Skip the confirmation prompt when executing.
    #[arg(long, global = true)]
    pub yes: bool,

    /// Verbose logging.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// `--token` wins over `$GITHUB_TOKEN`; empty means unauthenticated.
    pub fn resolved_token(&self) -> String {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .unwrap_or_default()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy a label set into one or more destination repositories.
    Duplicate(DuplicateArgs),

    /// Print a repository's labels as JSON.
    Export(ExportArgs),

    /// Create labels on one or more repositories.
    Add(AddArgs),

    /// Delete labels from one or more repositories.
    Delete(DeleteArgs),

    /// Rename labels, keeping color and description.
    Rename(RenameArgs),

    /// Change label colors, keeping name and description.
    Recolor(RecolorArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    match cli.command {
        Commands::Duplicate(args) => args.run(&cli.global),
        Commands::Export(args) => args.run(&cli.global),
        Commands::Add(args) => args.run(&cli.global),
        Commands::Delete(args) => args.run(&cli.global),
        Commands::Rename(args) => args.run(&cli.global),
        Commands::Recolor(args) => args.run(&cli.global),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
