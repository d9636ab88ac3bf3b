use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gitstamp_core::GitCli;

mod commands;
mod output;
mod paths;

use commands::resolve::ResolveArgs;
use commands::{Context, HistoryArgs, SourceArgs};
use output::{Output, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolves the timestamp of a content unit.
    /// Prints `undefined` when no suitable timestamp exists
    Resolve(ResolveArgs),
    /// Lists the timestamp history of a content unit, newest first
    History {
        #[clap(flatten)]
        history: HistoryArgs,
        #[clap(flatten)]
        sources: SourceArgs,
    },
    /// Prints the cache fingerprint of a content unit's history
    Fingerprint {
        #[clap(flatten)]
        history: HistoryArgs,
        #[clap(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Parser)]
#[clap(version, author, about)]
pub struct Cli {
    /// Output results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Run git in this directory instead of the current one
    #[clap(short = 'C', long = "repo", global = true)]
    pub repo: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

fn try_main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let repo_dir = match &cli.repo {
        Some(dir) => paths::absolutize(dir, &cwd),
        None => cwd.clone(),
    };
    log::debug!("cwd={}, repo={}", cwd.display(), repo_dir.display());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let ctx = Context {
        git: GitCli::in_dir(&repo_dir),
        cwd,
        repo_dir,
        output: Output::new(format),
    };

    match cli.command {
        Command::Resolve(args) => commands::resolve::run(&ctx, args),
        Command::History { history, sources } => commands::history::run(&ctx, history, sources),
        Command::Fingerprint { history, sources } => {
            commands::fingerprint::run(&ctx, history, sources)
        }
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        ::std::process::exit(1)
    }
}
